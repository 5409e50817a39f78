use clap::{Parser, Subcommand};

/// GreenInvest+ — an ESG demo dashboard that compares financial products and flags greenwashing.
#[derive(Parser, Debug)]
#[command(name = "green_invest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the dashboard pages interactively.
    Menu,

    /// Print the ESG portfolio overview.
    Dashboard {
        /// Emit the rows as JSON instead of the rendered view.
        #[arg(long)]
        json: bool,
    },

    /// Compare two products by name.
    Compare {
        /// First product name.
        first: String,

        /// Second product name.
        second: String,

        /// Emit the result as JSON instead of the rendered view.
        #[arg(long)]
        json: bool,
    },

    /// Export the product table to a CSV file.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "esg_products.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu
    }
}
