// src/services/import_export_service.rs
//
// Bulk import/export through the dish record codec.
//
// Imports have partial-success semantics: each line is decoded, validated
// and inserted on its own, and a bad line is counted, never fatal. There is
// no enclosing transaction.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::codec;
use crate::domain::{validate_dish, Dish};
use crate::error::AppResult;
use crate::repositories::DishRepository;

const EXPORT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

impl ImportSummary {
    fn record(&mut self, imported: bool) {
        if imported {
            self.imported += 1;
        } else {
            self.failed += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The catalog was empty; the destination was not touched
    NothingToExport,
    Exported { count: usize },
}

pub struct ImportExportService {
    dish_repo: Arc<dyn DishRepository>,
}

impl ImportExportService {
    pub fn new(dish_repo: Arc<dyn DishRepository>) -> Self {
        Self { dish_repo }
    }

    /// Import every line; ids in the input are ignored and reassigned
    pub fn import_lines<I, S>(&self, lines: I) -> ImportSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = ImportSummary::default();
        for (index, line) in lines.into_iter().enumerate() {
            summary.record(self.import_line(index + 1, line.as_ref()));
        }
        log_summary(&summary);
        summary
    }

    /// Import from a line stream.
    ///
    /// A line that is not valid UTF-8 counts as failed. Only a read error on
    /// the source aborts the import; rows inserted before it stay.
    pub fn import_from_reader<R: BufRead>(&self, mut reader: R) -> AppResult<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let imported = match std::str::from_utf8(trim_line_ending(&buf)) {
                Ok(line) => self.import_line(line_number, line),
                Err(e) => {
                    warn!("Line {}: skipped, not valid UTF-8 ({})", line_number, e);
                    false
                }
            };
            summary.record(imported);
        }
        log_summary(&summary);
        Ok(summary)
    }

    pub fn import_from_path(&self, path: &Path) -> AppResult<ImportSummary> {
        info!("Importing dishes from {}", path.display());
        let file = File::open(path)?;
        self.import_from_reader(BufReader::new(file))
    }

    /// Write every dish as one line, in id order
    pub fn export_to_writer<W: Write>(&self, writer: W) -> AppResult<ExportOutcome> {
        let dishes = self.dish_repo.list_all()?;
        if dishes.is_empty() {
            return Ok(ExportOutcome::NothingToExport);
        }
        write_records(writer, &dishes)
    }

    /// Export to a file, created only when there is something to write.
    ///
    /// `path` is used as given; see `export_destination`.
    pub fn export_to_path(&self, path: &Path) -> AppResult<ExportOutcome> {
        let dishes = self.dish_repo.list_all()?;
        if dishes.is_empty() {
            info!("No dishes to export");
            return Ok(ExportOutcome::NothingToExport);
        }

        let outcome = write_records(BufWriter::new(File::create(path)?), &dishes)?;
        info!("Exported {} dishes to {}", dishes.len(), path.display());
        Ok(outcome)
    }

    fn import_line(&self, line_number: usize, line: &str) -> bool {
        let dish = match codec::decode(line) {
            Ok(dish) => dish,
            Err(e) => {
                warn!("Line {}: skipped, {}", line_number, e);
                return false;
            }
        };

        if let Err(e) = validate_dish(&dish) {
            warn!("Line {}: skipped, {}", line_number, e);
            return false;
        }

        match self.dish_repo.insert(&dish) {
            Ok(id) => {
                debug!("Line {}: imported as dish {}", line_number, id);
                true
            }
            Err(e) => {
                warn!("Line {}: insert failed, {}", line_number, e);
                false
            }
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn write_records<W: Write>(mut writer: W, dishes: &[Dish]) -> AppResult<ExportOutcome> {
    for line in codec::encode_all(dishes) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(ExportOutcome::Exported {
        count: dishes.len(),
    })
}

fn log_summary(summary: &ImportSummary) {
    info!(
        "Import complete: {} imported, {} failed",
        summary.imported, summary.failed
    );
}

/// The file an export to `path` should use: `.txt` is appended unless the
/// name already ends with it (in any case).
pub fn export_destination(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_EXTENSION));
    if has_extension {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(EXPORT_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ConnectionProvider;
    use crate::error::AppError;
    use crate::repositories::{MockDishRepository, SqliteDishRepository};
    use std::io::Cursor;

    fn setup() -> (ImportExportService, Arc<SqliteDishRepository>) {
        let provider = Arc::new(ConnectionProvider::in_memory());
        let repo = Arc::new(SqliteDishRepository::new(provider));
        (ImportExportService::new(repo.clone()), repo)
    }

    #[test]
    fn test_import_counts_good_and_bad_lines() {
        let (service, repo) = setup();

        let summary = service.import_lines(["1;A;B;10.0;x;y;z", "bad;line", "2;C;D;5;a;b;c"]);
        assert_eq!(summary, ImportSummary { imported: 2, failed: 1 });

        let names: Vec<_> = repo.list_all().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_bad_lines_do_not_abort() {
        let (service, repo) = setup();
        let lines = [
            "",
            "x;A;B;1.0;;;",
            "1;A;B;1.0;;;",
            "1;;B;1.0;;;",
            "1;A;B;-3;;;",
            "1;A;B;cheap;;;",
            "2;Last;B;2.0;;;",
        ];

        let summary = service.import_lines(lines);
        assert_eq!(summary, ImportSummary { imported: 2, failed: 5 });
        assert_eq!(repo.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_repository_failure_counts_as_failed() {
        let mut repo = MockDishRepository::new();
        let mut calls = 0;
        repo.expect_insert().times(3).returning(move |_| {
            calls += 1;
            if calls == 2 {
                Err(AppError::Persistence("no rows".into()))
            } else {
                Ok(calls)
            }
        });
        let service = ImportExportService::new(Arc::new(repo));

        let summary = service.import_lines(["1;A;B;1.0;;;", "2;C;D;2.0;;;", "3;E;F;3.0;;;"]);
        assert_eq!(summary, ImportSummary { imported: 2, failed: 1 });
    }

    #[test]
    fn test_import_reassigns_ids() {
        let (service, repo) = setup();
        service.import_lines(["40;A;B;1.0;;;", "41;C;D;2.0;;;"]);

        let ids: Vec<_> = repo.list_all().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_import_from_reader_handles_crlf() {
        let (service, repo) = setup();
        let input = Cursor::new("1;A;B;10.0;x;y;z\r\n2;C;D;5;a;b;c\r\n");

        let summary = service.import_from_reader(input).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().photo_path.as_deref(), Some("z"));
    }

    #[test]
    fn test_non_utf8_line_counts_as_failed() {
        let (service, repo) = setup();
        let input = Cursor::new(b"1;A;B;10.0;x;y;z\n2;Caf\xe9;D;5;a;b;c\n3;E;F;6;a;b;c\n".to_vec());

        let summary = service.import_from_reader(input).unwrap();
        assert_eq!(summary, ImportSummary { imported: 2, failed: 1 });

        let names: Vec<_> = repo.list_all().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["A", "E"]);
    }

    #[test]
    fn test_read_error_aborts_import() {
        struct BrokenSource;

        impl std::io::Read for BrokenSource {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let (service, _) = setup();
        let result = service.import_from_reader(BufReader::new(BrokenSource));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let (service, _) = setup();
        let dir = tempfile::tempdir().unwrap();
        let result = service.import_from_path(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_export_writes_one_line_per_dish() {
        let (service, repo) = setup();
        repo.insert(&Dish::new("Kung Pao Chicken", "Sichuan", 38.5)).unwrap();
        repo.insert(&Dish::new("Egg Tart", "Dessert", 8.0)).unwrap();

        let mut out = Vec::new();
        let outcome = service.export_to_writer(&mut out).unwrap();
        assert_eq!(outcome, ExportOutcome::Exported { count: 2 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1;Kung Pao Chicken;Sichuan;38.5;;;\n2;Egg Tart;Dessert;8.0;;;\n"
        );
    }

    #[test]
    fn test_export_empty_catalog_touches_nothing() {
        let (service, _) = setup();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dishes_export.txt");

        assert_eq!(
            service.export_to_path(&path).unwrap(),
            ExportOutcome::NothingToExport
        );
        assert!(!path.exists());

        let mut out = Vec::new();
        assert_eq!(
            service.export_to_writer(&mut out).unwrap(),
            ExportOutcome::NothingToExport
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let (service, repo) = setup();
        repo.insert(
            &Dish::new("Mapo Tofu", "Sichuan", 22.0).with_details(
                "tofu, pork",
                "Numbing",
                Some("/photos/mapo.png".into()),
            ),
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.txt");
        service.export_to_path(&path).unwrap();

        let (target, target_repo) = setup();
        let summary = target.import_from_path(&path).unwrap();
        assert_eq!(summary, ImportSummary { imported: 1, failed: 0 });
        assert_eq!(target_repo.list_all().unwrap(), repo.list_all().unwrap());
    }

    #[test]
    fn test_export_destination_extension() {
        assert_eq!(
            export_destination(Path::new("/tmp/dishes_export")),
            PathBuf::from("/tmp/dishes_export.txt")
        );
        assert_eq!(
            export_destination(Path::new("/tmp/menu.TXT")),
            PathBuf::from("/tmp/menu.TXT")
        );
        assert_eq!(
            export_destination(Path::new("/tmp/menu.csv")),
            PathBuf::from("/tmp/menu.csv.txt")
        );
    }
}
