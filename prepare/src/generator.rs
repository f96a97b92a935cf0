use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::classification::Classification;
use crate::error::Error;
use crate::output::{self, OutputFormat};
use crate::ranges;
use crate::tables::{self, CodepointSet, PackedTable};

/// один запуск генератора: список диапазонов -> файл с таблицей
#[derive(Debug, Clone)]
pub struct Generator
{
    pub classification: Classification,
    pub format: OutputFormat,
    /// здесь лежит <NAME>.txt
    pub input_dir: PathBuf,
    /// сюда пишем <NAME>.c / <NAME>.rs
    pub output_dir: PathBuf,
}

/// результат разбора и упаковки, ещё не записанный на диск
#[derive(Debug, Clone)]
pub struct Artifact
{
    pub set: CodepointSet,
    pub table: PackedTable,
    pub contents: String,
}

/// итоги запуска
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report
{
    pub classification: Classification,
    /// количество кодпоинтов класса
    pub members: usize,
    /// количество групп в таблице
    pub groups: usize,
    /// группы, в которых есть хотя бы один кодпоинт
    pub nonzero_groups: usize,
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub output: PathBuf,
}

impl Generator
{
    pub fn new(classification: Classification) -> Self
    {
        Self {
            classification,
            format: OutputFormat::default(),
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn input_path(&self) -> PathBuf
    {
        self.input_dir.join(self.classification.input_file_name())
    }

    pub fn output_path(&self) -> PathBuf
    {
        self.output_dir.join(self.classification.output_file_name(self.format))
    }

    /// разбор, упаковка и текст файла. на диск ничего не пишется
    pub fn render(&self, text: &str) -> Result<Artifact, Error>
    {
        let set = ranges::parse(text)?;
        let table = tables::pack(&set)?;
        let contents = output::render(self.classification, self.format, &table);

        Ok(Artifact {
            set,
            table,
            contents,
        })
    }

    /// полный запуск. файл пишется только если все этапы прошли успешно
    #[tracing::instrument(skip_all, fields(classification = %self.classification))]
    pub fn run(&self) -> Result<Report, Error>
    {
        let input = self.input_path();
        info!("reading {}", input.display());

        let text = fs::read_to_string(&input).map_err(|source| Error::io(&input, source))?;
        let artifact = self.render(&text)?;

        let output = self.output_path();
        output::write(&output, &artifact.contents)?;

        let report = Report {
            classification: self.classification,
            members: artifact.set.len(),
            groups: artifact.table.len(),
            nonzero_groups: artifact.table.groups().iter().filter(|&&group| group != 0).count(),
            first: artifact.set.iter().next(),
            last: artifact.set.iter().last(),
            output,
        };

        output::stats::print(&report);

        Ok(report)
    }
}
