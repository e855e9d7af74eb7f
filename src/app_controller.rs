use anyhow::Result;
use log::{error, warn, info};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle, MultiProgress};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::translation::DocumentTranslationPipeline;

// @module: Application controller for document translation

/// Main application controller for document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.target_language.is_empty()
    }

    /// Test the connection to the configured provider
    pub async fn test_connection(&self) -> Result<()> {
        let pipeline = DocumentTranslationPipeline::from_config(&self.config)?;
        pipeline.test_connection().await?;
        info!(
            "Successfully connected to {}",
            self.config.translation.provider.display_name()
        );
        Ok(())
    }

    /// Run the main workflow with an input document and output directory
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let multi_progress = MultiProgress::new();
        self.run_with_progress(input_file, output_dir, &multi_progress, force_overwrite).await
    }

    /// Run the controller with progress reporting
    async fn run_with_progress(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        multi_progress: &MultiProgress,
        force_overwrite: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input file exists
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(&output_dir)?;

        // Check if a translation already exists
        let output_path = FileManager::generate_output_path(
            &input_file,
            &output_dir,
            &self.config.target_language,
        );
        if output_path.exists() && !force_overwrite {
            // Skip if translation already exists and no force flag
            warn!("Skipping file, translation already exists (use -f to force overwrite)");
            return Ok(());
        }

        let pipeline = DocumentTranslationPipeline::from_config(&self.config)?;

        // Create a progress bar over the unit completion percentage
        let progress_bar = multi_progress.add(ProgressBar::new(100));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {percent}% {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        info!(
            "Translating {} to {} with {}",
            input_file.display(),
            self.config.target_language,
            self.config.translation.provider.display_name()
        );
        progress_bar.set_message("Translating");

        let pb = progress_bar.clone();
        let result = pipeline
            .run(&input_file, &output_path, move |percent| {
                pb.set_position(percent as u64);
            })
            .await;

        // Finish and clear the progress bar so only the folder progress bar
        // remains visible when processing multiple files
        progress_bar.finish_and_clear();

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error: {}", e);
                return Err(e.into());
            }
        };

        if outcome.failed > 0 {
            info!(
                "Translation completed with {} of {} units failed (original text kept)",
                outcome.failed, outcome.total
            );

            // Write per-unit issues to prevod.issues.log
            let log_file_path = output_dir.join("prevod.issues.log");
            let context = format!(
                "{} -> {} ({})",
                input_file.display(),
                self.config.target_language,
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            );

            if let Err(e) = self.write_issues_to_file(&outcome.issues, &log_file_path, &context) {
                warn!("Failed to write issues to file: {}", e);
            } else {
                info!("Issues written to {}", log_file_path.display());
            }
        } else {
            info!("Successfully translated all {} units", outcome.total);
        }

        info!("{}", Self::success_message(&output_path, start_time.elapsed()));

        Ok(())
    }

    // Completion message shown after a successful single-file run
    fn success_message(output_path: &Path, duration: std::time::Duration) -> String {
        format!(
            "Document translated successfully to {} ({})",
            output_path.display(),
            Self::format_duration(duration)
        )
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }

    /// Run the workflow in folder mode, processing every document in a directory.
    /// Files that already have a translated counterpart will be skipped.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input directory exists
        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all interchange documents in the directory (recursive)
        let document_files: Vec<PathBuf> = FileManager::find_files(&input_dir, "json")?
            .into_iter()
            .filter(|path| !Self::is_translated_output(path, &self.config.target_language))
            .collect();

        // If no documents found, return error
        if document_files.is_empty() {
            return Err(anyhow::anyhow!("No documents found in directory: {:?}", input_dir));
        }

        // Create multi-progress instance for multiple file processing
        let multi_progress = MultiProgress::new();

        // Create a progress bar for folder processing
        let folder_pb = multi_progress.add(ProgressBar::new(document_files.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;

        // Process each document
        for document_file in document_files.iter() {
            // Get the file name for display
            let file_name = document_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            // Update the folder progress bar to show current file
            folder_pb.set_message(format!("Processing: {}", file_name));

            // Get output directory (use the file's own directory)
            let output_dir = match document_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.clone(),
            };

            // Check if translation already exists
            let output_path = FileManager::generate_output_path(
                document_file,
                &output_dir,
                &self.config.target_language,
            );
            if output_path.exists() && !force_overwrite {
                warn!("Skipping {}, translation already exists (use -f to force overwrite)", file_name);
                skip_count += 1;
                folder_pb.inc(1);
                continue;
            }

            // Run the translation for this file
            match self.run_with_progress(document_file.clone(), output_dir, &multi_progress, force_overwrite).await {
                Ok(_) => {
                    success_count += 1;
                },
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            // Update the folder progress bar
            folder_pb.inc(1);
        }

        // Finish the folder progress bar
        folder_pb.finish_with_message("Folder processing complete");

        // Give summary results - important for batch operations
        let duration = start_time.elapsed();
        let summary_message = format!("Folder processing completed: {} processed, {} skipped, {} errors",
             success_count, skip_count, error_count);
        info!("{}", summary_message);

        // Write summary to log file
        let log_file_path = input_dir.join("prevod.issues.log");
        let context = format!("Folder Processing: {} ({})",
            input_dir.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

        let summary_line = format!(
            "{} - Duration: {}",
            summary_message,
            Self::format_duration(duration)
        );

        if let Err(e) = self.write_issues_to_file(&[summary_line], &log_file_path, &context) {
            warn!("Failed to write folder logs to file: {}", e);
        } else {
            info!("Folder processing logs written to {}", log_file_path.display());
        }

        Ok(())
    }

    /// True when a path already carries the target-language suffix produced
    /// by [`FileManager::generate_output_path`] (e.g. "report.fr.json").
    fn is_translated_output(path: &Path, target_language: &str) -> bool {
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            return false;
        };
        stem.to_lowercase()
            .ends_with(&format!(".{}", target_language.to_lowercase()))
    }

    /// Write translation issues to a log file
    fn write_issues_to_file(&self, issues: &[String], file_path: &Path, context: &str) -> Result<()> {
        let mut log_content = String::new();

        // Add header
        log_content.push_str(&format!("Translation Log - {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));
        log_content.push_str(&format!("Context: {}\n\n", context));

        // Add each issue
        for issue in issues {
            log_content.push_str(&format!("{}\n", issue));
        }

        // Write to file
        FileManager::write_to_file(file_path, &log_content)?;

        Ok(())
    }
}
