use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use skillgap::catalog::{load_resumes_from_path, CourseCatalog, JobCatalog, ResumeRecord};
use skillgap::config::AppConfig;
use skillgap::error::AppError;
use skillgap::workflows::analysis::classifier::{
    evaluate_classifier, fit_role_classifier, load_training_rows_from_path, TrainedRoleClassifier,
};
use skillgap::workflows::analysis::{missing_skills, placement_score, recommend_courses};

#[derive(Args, Debug, Default)]
pub(crate) struct ExtractArgs {
    /// Override the stored-resume JSON path
    #[arg(long)]
    pub(crate) resumes: Option<PathBuf>,
    /// Override the course catalog CSV path (source of the vocabulary)
    #[arg(long)]
    pub(crate) courses: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GapArgs {
    /// Override the stored-resume JSON path
    #[arg(long)]
    pub(crate) resumes: Option<PathBuf>,
    /// Override the job catalog JSON path
    #[arg(long)]
    pub(crate) jobs: Option<PathBuf>,
    /// Override the course catalog CSV path
    #[arg(long)]
    pub(crate) courses: Option<PathBuf>,
    /// Suggest courses covering each gap
    #[arg(long)]
    pub(crate) recommend: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TrainArgs {
    /// Labeled training dataset CSV (skills, job_title)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Where to write the model artifact
    #[arg(long)]
    pub(crate) model_out: Option<PathBuf>,
    /// Where to write the vectorizer artifact
    #[arg(long)]
    pub(crate) vectorizer_out: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Labeled evaluation dataset CSV (skills, job_title)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Override the model artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Override the vectorizer artifact path
    #[arg(long)]
    pub(crate) vectorizer: Option<PathBuf>,
}

/// Print the recognized skill subset for every stored resume.
pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let resumes_path = args.resumes.unwrap_or(config.data.resumes_path);
    let courses_path = args.courses.unwrap_or(config.data.courses_path);

    let resumes = load_resumes_from_path(&resumes_path)?;
    let vocabulary = CourseCatalog::from_path(&courses_path)?.vocabulary();

    for resume in &resumes {
        let recognized: Vec<&String> = resume
            .skills
            .iter()
            .filter(|skill| vocabulary.contains(&skill.to_lowercase()))
            .collect();
        let rendered: Vec<&str> = recognized.iter().map(|s| s.as_str()).collect();
        println!("{} -> extracted skills: [{}]", resume.name, rendered.join(", "));
    }

    Ok(())
}

/// Compute skill gaps for every stored resume against every job role.
pub(crate) fn run_gap(args: GapArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let resumes_path = args.resumes.unwrap_or(config.data.resumes_path);
    let jobs_path = args.jobs.unwrap_or(config.data.jobs_path);
    let courses_path = args.courses.unwrap_or(config.data.courses_path);

    let resumes = load_resumes_from_path(&resumes_path)?;
    let jobs = JobCatalog::from_path(&jobs_path)?;
    let courses = if args.recommend {
        Some(CourseCatalog::from_path(&courses_path)?)
    } else {
        None
    };

    println!("Skill gap analysis");
    for resume in &resumes {
        println!("\nCandidate: {}", resume.name);
        let candidate = declared_skills(resume);

        for role in jobs.roles() {
            let missing = missing_skills(&candidate, &role.required_skills);
            let score = placement_score(&candidate, &role.required_skills);
            println!(
                "  {} -> {:.2}% match ({}/{}); missing: [{}]",
                role.title,
                score.percentage,
                score.matched,
                score.required_total,
                missing.join(", ")
            );

            if let Some(catalog) = &courses {
                if !missing.is_empty() {
                    let recommended = recommend_courses(&missing, catalog.courses());
                    let rendered: Vec<&str> = recommended.iter().map(|s| s.as_str()).collect();
                    println!("    suggested courses: [{}]", rendered.join(", "));
                }
            }
        }
    }

    Ok(())
}

/// Fit the role classifier and persist both artifacts.
pub(crate) fn run_train(args: TrainArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from("data/job_training_data.csv"));
    let model_path = args.model_out.unwrap_or(config.data.model_path);
    let vectorizer_path = args.vectorizer_out.unwrap_or(config.data.vectorizer_path);

    let rows = load_training_rows_from_path(&data_path)?;
    let classifier = fit_role_classifier(&rows)?;
    classifier.save(&model_path, &vectorizer_path)?;

    println!(
        "trained role classifier on {} example(s) across {} label(s)",
        rows.len(),
        classifier.labels().len()
    );
    println!("model artifact:      {}", model_path.display());
    println!("vectorizer artifact: {}", vectorizer_path.display());

    Ok(())
}

/// Load the persisted classifier and report accuracy on a labeled dataset.
pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from("data/job_training_data.csv"));
    let model_path = args.model.unwrap_or(config.data.model_path);
    let vectorizer_path = args.vectorizer.unwrap_or(config.data.vectorizer_path);

    let rows = load_training_rows_from_path(&data_path)?;
    let classifier = TrainedRoleClassifier::load(&model_path, &vectorizer_path)?;

    println!("classifier trained at {}", classifier.trained_at());
    println!("{}", evaluate_classifier(&classifier, &rows));

    Ok(())
}

fn declared_skills(resume: &ResumeRecord) -> BTreeSet<String> {
    resume.skills.iter().map(|skill| skill.to_lowercase()).collect()
}
