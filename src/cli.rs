use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lazytodo", version, about = "A terminal counter and todo list")]
pub struct Args {
    /// Theme to start with (e.g., "Material", "Catppuccin Latte")
    #[arg(short, long)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_flag() {
        let args = Args::parse_from(["lazytodo", "--theme", "Material"]);
        assert_eq!(args.theme.as_deref(), Some("Material"));

        let args = Args::parse_from(["lazytodo"]);
        assert!(args.theme.is_none());
    }
}
