use regex::Regex;
use std::{collections::HashMap, fs};

const TARGET_ENV_FILE: &str = "../../envs/mainnet.env";

/// Sync variable values defined in code with .env file
fn main() {
    let file = include_str!("src/mainnet.rs");

    let variables_to_track = [
        "NETWORK_NAME",
        "EXPLORER_URL",
        "EXPLORER_API",
        "RPC_URL",
        "TOKEN_SYMBOL",
        "TOKEN_CONTRACT_ADDRESS",
        "SEVEN_DAY_POOL_ADDRESS",
        "TEN_DAY_POOL_ADDRESS",
        "THIRTY_TWO_DAY_POOL_ADDRESS",
        "NINETY_DAY_POOL_ADDRESS",
    ];

    let mut replace_with = HashMap::new();

    for var in variables_to_track {
        // if script fails, debug with `cargo check -vv``
        println!("Looking for {}", var);

        // read pattern that looks like:
        // <var>: &str = "<whatever is between quotes>"
        let pattern = format!(r#"{}: &str\s*=\s*"([^"]*)""#, regex::escape(var));

        let re = Regex::new(&pattern).unwrap();
        let value = re
            .captures(file)
            .and_then(|caps| caps.get(1).map(|match_| match_.as_str().to_string()))
            .expect("Couldn't find var in source file");
        println!("Storing {}={}", var, value);
        replace_with.insert(var, value);
    }

    let mut contents = fs::read_to_string(TARGET_ENV_FILE).unwrap();

    for (var, value) in replace_with {
        // match a pattern that looks like:
        // <var> = "<value>"
        // where `<var>` is a variable name inserted into search pattern
        let pattern = format!(r#"{}\s*=\s*"([^"]*)""#, regex::escape(var));

        // replace matched pattern with
        // <var>="<value>"
        let re = Regex::new(&pattern).unwrap();
        contents = re
            .replace(&contents, |_: &regex::Captures| {
                format!(r#"{}="{}""#, var, value)
            })
            .to_string();
    }

    fs::write(TARGET_ENV_FILE, contents).unwrap();
}
