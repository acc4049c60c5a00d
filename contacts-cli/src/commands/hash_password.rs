//! Print an Argon2id hash for provisioning an admin row
//!
//! The server never writes `admins`; operators insert rows by hand:
//!
//! ```sql
//! INSERT INTO admins (email, password) VALUES ('admin@example.com', '<hash>');
//! ```

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use clap::Parser;

use contacts_server::auth::hash_password;

#[derive(Parser, Debug)]
pub struct HashPasswordArgs {
    /// Password to hash; read from the first line of stdin when omitted
    pub password: Option<String>,
}

pub fn run_hash_password(args: HashPasswordArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_owned()
        }
    };

    if password.is_empty() {
        bail!("password cannot be empty");
    }

    let hash = hash_password(&password)?;
    println!("{}", hash);
    Ok(())
}
