use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke one RPC function and print its envelope
    Call {
        /// Function name, with or without the GRIND_BREAKER_ prefix
        function: String,

        /// JSON argument array
        #[arg(default_value = "[]")]
        args: String,

        /// Request id echoed back by the host
        #[arg(long, default_value = "cli")]
        request_id: String,
    },

    /// List the bound function names
    Functions,
}
