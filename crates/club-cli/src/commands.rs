use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Path to continue to after signing in
        #[arg(long)]
        from: Option<String>,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show the current session
    Whoami,

    /// Ask whether a path may be opened with the current session
    Visit { path: String },

    /// Update the signed-in member's profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// List the site's routes and their access requirements
    Routes,
}
