use std::process;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use codewars_client as cw;

#[derive(Debug, argh::FromArgs)]
#[argh(description = "look up a codewars user")]
struct Options {
    #[argh(positional, description = "the codewars username")]
    username: String,

    #[argh(
        option,
        short = 'p',
        description = "settings profile in ./profiles, falls back to CODEWARS_PROFILE"
    )]
    profile: Option<String>,
}

fn main() {
    dotenv::dotenv().ok();

    // Set up logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to start the logger");

    let options: Options = argh::from_env();

    let profile = options
        .profile
        .or_else(|| std::env::var("CODEWARS_PROFILE").ok());

    let settings = match profile {
        Some(profile) => match cw::settings::Settings::from_profile(&profile) {
            Ok(settings) => settings,
            Err(why) => {
                tracing::error!("{}", why);
                process::exit(1);
            }
        },
        None => cw::settings::Settings::default(),
    };

    match settings.api().get_user(&options.username) {
        Ok(user) => {
            println!("{} ({})", user.username, user.name);
            println!("  honor: {}", user.honor);
            println!("  overall: {} ({})", user.rank.overall.name, user.rank.overall.score);
            for (language, rank) in &user.rank.languages {
                println!("  {}: {} ({})", language, rank.name, rank.score);
            }
            println!(
                "  kata: {} completed, {} authored",
                user.code_challenges.total_completed, user.code_challenges.total_authored
            );
        }
        Err(why) => {
            tracing::error!("Lookup of {} failed: {}", options.username, why);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    #[test]
    fn help_is_not_a_username() {
        let early_exit = Options::from_args(&["lookup"], &["--help"]).unwrap_err();
        assert_eq!(early_exit.status, Ok(()));
        assert!(early_exit.output.contains("Usage: lookup"));
    }

    #[test]
    fn username_and_profile() {
        let options = Options::from_args(&["lookup"], &["chuck", "--profile", "debug"]).unwrap();
        assert_eq!(options.username, "chuck");
        assert_eq!(options.profile.as_deref(), Some("debug"));
    }

    #[test]
    fn username_is_required() {
        let early_exit = Options::from_args(&["lookup"], &[]).unwrap_err();
        assert_eq!(early_exit.status, Err(()));
    }
}
