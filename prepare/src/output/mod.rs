use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classification::Classification;
use crate::error::Error;
use crate::tables::PackedTable;
use crate::DOMAIN_MAX;

use self::format::format_groups;

mod format;
pub mod stats;

/// количество групп в строке сгенерированного файла
pub const GROUPS_PER_LINE: usize = 8;

/// язык сгенерированного файла
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat
{
    /// #define + static const unsigned char[]
    #[default]
    C,
    /// pub const + pub static [u8; N]
    Rust,
}

impl OutputFormat
{
    pub fn extension(&self) -> &'static str
    {
        match self {
            OutputFormat::C => "c",
            OutputFormat::Rust => "rs",
        }
    }
}

/// текст сгенерированного файла с таблицей
pub fn render(classification: Classification, format: OutputFormat, table: &PackedTable) -> String
{
    let max = classification.max_constant_name();
    let name = classification.table_name();
    let count = table.len();
    let body = format_groups(table.groups(), GROUPS_PER_LINE);

    match format {
        OutputFormat::C => format!(
            "#define {max} (0x{DOMAIN_MAX:X})\n\n\
            // clang-format off\n\
            static const unsigned char {name}[] = {{ // {count}\n\
            {body}\n\
            }};\n\
            // clang-format on\n"
        ),
        OutputFormat::Rust => format!(
            "pub const {max}: u32 = 0x{DOMAIN_MAX:X};\n\n\
            #[rustfmt::skip]\n\
            pub static {name}: [u8; {count}] = [ // {count}\n\
            {body}\n\
            ];\n"
        ),
    }
}

/// пишем файл целиком: сначала во временный файл рядом, затем переименовываем.
/// при ошибке целевой файл не затрагивается
pub fn write(path: &Path, contents: &str) -> Result<(), Error>
{
    let mut temporary = path.as_os_str().to_owned();
    temporary.push(".tmp");
    let temporary = PathBuf::from(temporary);

    if let Err(source) = fs::write(&temporary, contents) {
        let _ = fs::remove_file(&temporary);
        return Err(Error::io(temporary, source));
    }

    if let Err(source) = fs::rename(&temporary, path) {
        let _ = fs::remove_file(&temporary);
        return Err(Error::io(path, source));
    }

    debug!(bytes = contents.len(), "{} written", path.display());

    Ok(())
}
