use grant_scorer::{bad_request_body, run};

fn main() {
    if let Err(err) = run() {
        if err.is_user_input() {
            println!("{}", bad_request_body(&err));
            std::process::exit(1);
        }
        eprintln!("application error: {err}");
        std::process::exit(2);
    }
}
