//! Headless driver for the NewsCheck page flows
//!
//! Runs the submission flow with the given news text, and optionally the
//! guide confirmation flow, against the configured backend:
//!
//! ```sh
//! NEWSCHECK_BACKEND_BASE_URL=http://127.0.0.1:5000 \
//!     newscheck --confirm-guide "Some article text to check"
//! ```

use newscheck_client::{
    client, flows,
    view::{ConfirmControl, LoggingView},
    Submission,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let confirm_guide = if let Some(pos) = args.iter().position(|a| a == "--confirm-guide") {
        args.remove(pos);
        true
    } else {
        false
    };

    if args.is_empty() && !confirm_guide {
        eprintln!("Usage: newscheck [--confirm-guide] [news text...]");
        std::process::exit(2);
    }

    let detector = client().build()?;
    let view = LoggingView;

    if !args.is_empty() {
        let submission = Submission::news_text(args.join(" "));
        let outcome = flows::run_submission_flow(&detector, &view, submission).await;
        println!("submission flow: {:?}", outcome);
    }

    if confirm_guide {
        let control = ConfirmControl::new("confirm-guide");
        let outcome = flows::run_confirmation_flow(&detector, &view, Some(&control)).await;
        println!("confirmation flow: {:?}", outcome);
    }

    Ok(())
}
