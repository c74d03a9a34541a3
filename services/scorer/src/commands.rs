use grant_scoring::error::AppError;
use grant_scoring::grants::{load_and_validate_config, ConfigLoadError};
use grant_scoring::payload::parse_payload;

use crate::cli::{ScoreArgs, ValidateArgs};
use crate::infra::{bootstrap, read_payload, scoring_service};

pub(crate) fn score(args: ScoreArgs) -> Result<(), AppError> {
    let service = scoring_service()?;
    let body = read_payload(args.payload.as_deref())?;
    let answers = parse_payload(&body)?;

    let result = service.score(&args.grant_type, &answers, args.allow_partial_scoring)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    let json = rendered.map_err(|err| AppError::Io(err.into()))?;
    println!("{json}");
    Ok(())
}

pub(crate) fn grants() -> Result<(), AppError> {
    let (_, registry) = bootstrap()?;

    for (grant_type, config) in registry.iter() {
        let threshold = config
            .eligibility_percentage_threshold
            .map(|threshold| format!("{threshold}%"))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "{grant_type}\tquestions={}\tmax_score={}\tthreshold={threshold}",
            config.questions.len(),
            config.max_score
        );
    }
    Ok(())
}

pub(crate) fn validate(args: ValidateArgs) -> Result<(), AppError> {
    match load_and_validate_config(&args.path) {
        Ok(config) => {
            println!(
                "{} is valid: {} questions, max score {}",
                args.path.display(),
                config.questions.len(),
                config.max_score
            );
            Ok(())
        }
        Err(ConfigLoadError::Invalid { grant, problems }) => {
            for problem in &problems {
                eprintln!("{}: {problem}", args.path.display());
            }
            Err(ConfigLoadError::Invalid { grant, problems }.into())
        }
        Err(err) => Err(err.into()),
    }
}
