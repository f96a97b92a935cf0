use std::path::PathBuf;

/// ошибка разбора одной строки списка диапазонов
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError
{
    /// перед разделителем полей ничего нет
    #[error("empty code point entry before the field separator")]
    EmptyEntry,

    /// вместо шестнадцатеричного числа - что-то другое
    #[error("`{0}` is not a hexadecimal code point")]
    InvalidHex(String),

    /// нижняя граница диапазона больше верхней
    #[error("range {low:04X}..{high:04X} has its bounds inverted")]
    InvertedRange
    {
        low: u32,
        high: u32,
    },

    /// кодпоинт за пределами таблицы
    #[error(
        "code point {0} lies beyond the table domain 0..={max:X}; trim the list or raise DOMAIN_MAX",
        max = crate::DOMAIN_MAX
    )]
    OutOfDomain(String),
}

/// ошибки генератора таблиц
#[derive(Debug, thiserror::Error)]
pub enum Error
{
    #[error("could not access {}", .path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input at line {line}")]
    Parse
    {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("unrecognised classification `{0}`, expected XID_START or XID_CONTINUE")]
    UnknownClassification(String),

    /// счётчик групп при упаковке не совпал с размером домена
    #[error("packed {actual} groups, expected {expected}")]
    GroupCountMismatch
    {
        expected: usize,
        actual: usize,
    },
}

impl Error
{
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self
    {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
