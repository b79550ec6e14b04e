use std::{
    fs,
    path::PathBuf,
    process::Command,
};

use crate::{latex::latex_document, EquationError, EquationSystem, Result};

/// Turns LaTeX markup into a viewable document.
pub trait Renderer {
    /// Returns the path of the produced document.
    fn render(&self, markup: &str) -> Result<PathBuf>;
}

/// Compiles markup with an external LaTeX compiler into `<job_name>.pdf`
/// inside `directory`.
///
/// The intermediate `<job_name>.tex`, `.log` and `.aux` files are removed
/// afterwards, whether or not compilation succeeded. Files of those names that
/// already existed in `directory` are overwritten by the compiler and removed
/// as well. Two renders with the same job name
/// and directory overwrite each other; the last one to finish wins.
#[derive(Clone, Debug)]
pub struct PdfLatex {
    pub compiler: String,
    pub job_name: String,
    pub directory: PathBuf,
}

impl Default for PdfLatex {
    fn default() -> Self {
        Self {
            compiler: "pdflatex".to_string(),
            job_name: "out".to_string(),
            directory: PathBuf::from("."),
        }
    }
}

/// Files that get deleted when this goes out of scope.
struct Scratch(Vec<PathBuf>);

impl Drop for Scratch {
    fn drop(&mut self) {
        for path in &self.0 {
            if let Err(err) = fs::remove_file(path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("couldn't remove {}: {err}", path.display());
                }
            }
        }
    }
}

impl PdfLatex {
    fn job_file(&self, extension: &str) -> PathBuf {
        self.directory.join(format!("{}.{extension}", self.job_name))
    }

    pub fn output_path(&self) -> PathBuf {
        self.job_file("pdf")
    }
}

/// The first `!`-prefixed error line LaTeX printed, if any.
fn latex_error(stdout: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stdout).lines().find(|line| line.starts_with('!')).map(str::to_string)
}

impl Renderer for PdfLatex {
    fn render(&self, markup: &str) -> Result<PathBuf> {
        let source = self.job_file("tex");
        let _scratch = Scratch(vec![source.clone(), self.job_file("log"), self.job_file("aux")]);

        fs::write(&source, markup).map_err(|err| EquationError::RenderFailure(format!("couldn't write {}: {err}", source.display())))?;

        log::info!("compiling {} with {}", source.display(), self.compiler);
        let output = Command::new(&self.compiler)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(format!("{}.tex", self.job_name))
            .current_dir(&self.directory)
            .output()
            .map_err(|err| EquationError::RenderFailure(format!("couldn't run {}: {err}", self.compiler)))?;

        if !output.status.success() {
            let reason = latex_error(&output.stdout).unwrap_or_else(|| output.status.to_string());
            return Err(EquationError::RenderFailure(format!("{} failed: {reason}", self.compiler)));
        }

        let pdf = self.output_path();
        log::info!("wrote {}", pdf.display());
        Ok(pdf)
    }
}

/// Builds the LaTeX document for `systems` and hands it to `renderer`.
pub fn generate_document(systems: &[EquationSystem], renderer: &dyn Renderer) -> Result<PathBuf> {
    let markup = latex_document(systems)?;
    renderer.render(&markup)
}
