use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};

use gist_store::{GitHubGists, Session};

mod scanner;
mod uploader;

fn main() -> Result<()> {
    let matches = Command::new("gist")
        .version("0.1.0")
        .about("Scans files for embedded gist sections and uploads them to GitHub")
        .arg(
            Arg::new("file")
                .long("file")
                .num_args(1)
                .help("Send a single file to gist"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .num_args(1)
                .help("Scan every file under the given directory"),
        )
        .arg(
            Arg::new("setfile")
                .long("setfile")
                .num_args(1)
                .help("Override the uploaded file name shown on the gist page"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .num_args(1)
                .help("GitHub access token; defaults to the GIST_ACCESS_TOKEN environment variable"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the assembled records as JSON instead of uploading")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Report files skipped for missing markers")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();
    let dry_run = *matches.get_one::<bool>("dry_run").unwrap();

    let targets: Vec<PathBuf> = if let Some(file) = matches.get_one::<String>("file") {
        vec![PathBuf::from(file)]
    } else if let Some(dir) = matches.get_one::<String>("dir") {
        scanner::files_under(Path::new(dir))?
    } else {
        bail!("nothing to do: pass --file <path> or --dir <path>");
    };

    let outcome = scanner::parse_all(&targets, verbose);
    for (path, err) in &outcome.failures {
        eprintln!("{}: {}", path.display(), err);
    }

    let mut records = outcome.records;
    if let Some(name) = matches.get_one::<String>("setfile") {
        for (_, gist) in &mut records {
            if let Some(file) = gist.files.first_mut() {
                file.filename = Some(name.clone());
            }
        }
    }

    if records.is_empty() {
        if outcome.failures.is_empty() {
            eprintln!("no gistable files found");
        }
    } else if dry_run {
        for (path, gist) in &records {
            let rendered = serde_json::to_string_pretty(gist)
                .with_context(|| format!("could not serialize record for {}", path.display()))?;
            println!("{rendered}");
        }
    } else {
        let session = match matches.get_one::<String>("token") {
            Some(token) => Session::new(token.clone()),
            None => Session::from_env()?,
        };
        let client = GitHubGists::new(&session);

        let mut failed_uploads = 0;
        for (path, result) in uploader::send_all(&client, &records) {
            match result {
                Ok(remote) => println!("{} -> {}", path.display(), remote.html_url),
                Err(err) => {
                    failed_uploads += 1;
                    eprintln!("{}: upload failed: {}", path.display(), err);
                }
            }
        }
        if failed_uploads > 0 {
            bail!("{failed_uploads} upload(s) failed");
        }
    }

    if !outcome.failures.is_empty() {
        bail!(
            "{} file(s) carried malformed gist metadata",
            outcome.failures.len()
        );
    }
    Ok(())
}
