//! Minimal command-line front end for the score API.
//!
//! ```text
//! lookup <student-id>       look up one student's scores
//! lookup top10              print the leaderboard
//! lookup report <subject>   print a subject's score distribution
//! ```
//!
//! Reads the client configuration from the TOML file named by the
//! `SCORES_CONFIG` environment variable, falling back to defaults.

use anyhow::{bail, Result};

use exam_scores::{ClientConfig, ScoreService};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match std::env::var("SCORES_CONFIG") {
        Ok(path) => ClientConfig::from_file(&path)?,
        Err(_) => ClientConfig::default(),
    };
    let service = ScoreService::connect(&config)?;

    match args.as_slice() {
        [cmd] if cmd == "top10" => {
            let entries = service.fetch_leaderboard().await?;
            for entry in entries {
                println!("#{:<3} {:>8}  total {:.2}", entry.rank, entry.student_id, entry.total_score);
                for score in entry.subjects.values() {
                    println!("      {}: {:.2}", score.label, score.value);
                }
            }
        }
        [cmd, subject] if cmd == "report" => {
            let dist = service.fetch_distribution_by_name(subject).await?;
            println!("{} ({} students)", dist.label, dist.total);
            for bucket in dist.buckets {
                println!("  {}: {}", bucket.band.label(), bucket.count);
            }
        }
        [student_id] => {
            let record = service.lookup_student(student_id).await?;
            println!("{} ({})", record.name, record.student_id);
            for score in record.subjects.values() {
                println!("  {}: {:.2}", score.label, score.value);
            }
            println!(
                "  total {:.2} over {} subjects, average {:.2}",
                record.total_score, record.subject_count, record.average_score
            );
        }
        _ => bail!("usage: lookup <student-id> | top10 | report <subject>"),
    }

    Ok(())
}
