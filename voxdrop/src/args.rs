use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Text to speech files with presigned download links
#[derive(Debug, Parser)]
#[command(name = "voxdrop", about = "Synthesize speech into S3 and hand out download links")]
pub struct Args {
    /// What to run; detected from the environment when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run as an AWS Lambda function, configured from the environment
    Lambda,
    /// Run the local HTTP server
    Serve {
        /// Path to configuration file; the environment is used when omitted
        #[arg(short, long, env = "VOXDROP_CONFIG")]
        config: Option<PathBuf>,

        /// Override the listen address
        #[arg(long, env = "VOXDROP_LISTEN")]
        listen: Option<SocketAddr>,
    },
}

impl Command {
    /// Lambda when started by the Lambda runtime, otherwise the local server
    pub fn detect() -> Self {
        if std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
            Self::Lambda
        } else {
            Self::Serve {
                config: None,
                listen: None,
            }
        }
    }
}
