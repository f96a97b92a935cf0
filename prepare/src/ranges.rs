use std::fmt::Write;
use std::ops::RangeInclusive;

use tracing::{debug, info, trace};

use crate::error::{Error, ParseError};
use crate::tables::CodepointSet;
use crate::DOMAIN_MAX;

/// разделитель полей: значимо только первое поле
pub const FIELD_SEPARATOR: char = ';';
/// начало комментария в файлах UCD
pub const COMMENT_MARKER: char = '#';
/// маркер диапазона: 0041..005A
pub const RANGE_MARKER: &str = "..";

/// кодпоинт или диапазон кодпоинтов (обе границы включительно) из одной строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken
{
    Point(u32),
    Range(u32, u32),
}

impl RangeToken
{
    pub fn low(&self) -> u32
    {
        match *self {
            RangeToken::Point(code) => code,
            RangeToken::Range(low, _) => low,
        }
    }

    pub fn high(&self) -> u32
    {
        match *self {
            RangeToken::Point(code) => code,
            RangeToken::Range(_, high) => high,
        }
    }

    /// количество кодпоинтов
    /// для перевёрнутого диапазона - 0, как и у `iter()`
    pub fn len(&self) -> usize
    {
        match self.low() <= self.high() {
            true => (self.high() - self.low()) as usize + 1,
            false => 0,
        }
    }

    pub fn iter(&self) -> RangeInclusive<u32>
    {
        self.low() ..= self.high()
    }
}

/// разбор строки списка:
///   - обрезаем по первому разделителю (или комментарию), удаляем все пробельные символы
///   - "XXXX..YYYY" - диапазон, иначе - один кодпоинт
///
/// пустая строка и строка-комментарий дают None
pub fn parse_line(line: &str) -> Result<Option<RangeToken>, ParseError>
{
    let end = line
        .find(|c: char| c == FIELD_SEPARATOR || c == COMMENT_MARKER)
        .unwrap_or(line.len());

    let entry: String = line[.. end].chars().filter(|c| !c.is_whitespace()).collect();

    if entry.is_empty() {
        return match line[end ..].starts_with(FIELD_SEPARATOR) {
            true => Err(ParseError::EmptyEntry),
            false => Ok(None),
        };
    }

    let token = match entry.split_once(RANGE_MARKER) {
        Some((low, high)) => {
            let (low, high) = (parse_hex(low)?, parse_hex(high)?);

            if low > high {
                return Err(ParseError::InvertedRange { low, high });
            }

            RangeToken::Range(low, high)
        }
        None => RangeToken::Point(parse_hex(&entry)?),
    };

    Ok(Some(token))
}

/// шестнадцатеричное число без префикса 0x, в пределах таблицы
fn parse_hex(text: &str) -> Result<u32, ParseError>
{
    // from_str_radix допускает знак "+", нам он не нужен
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex(text.to_owned()));
    }

    match u32::from_str_radix(text, 16) {
        Ok(code) if code <= DOMAIN_MAX => Ok(code),
        _ => Err(ParseError::OutOfDomain(text.to_owned())),
    }
}

/// метка порядка байтов в начале UTF-8 файла
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// разбор всего списка диапазонов и составление множества кодпоинтов
pub fn parse(text: &str) -> Result<CodepointSet, Error>
{
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let mut set = CodepointSet::new();
    // с учётом повторов
    let mut indexed = 0;

    for (index, line) in text.lines().enumerate() {
        let number = index + 1;

        let token = match parse_line(line) {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!(line = number, "skipping blank or comment line");
                continue;
            }
            Err(source) => return Err(Error::Parse { line: number, source }),
        };

        set.insert_token(&token);
        indexed += token.len();

        trace!(line = number, ?token, indexed, "indexing code points");
    }

    debug!(indexed, "indexing complete");
    info!(members = set.len(), "code points indexed");

    Ok(set)
}

/// обратное преобразование: множество кодпоинтов -> список в формате DerivedCoreProperties.txt,
/// подряд идущие кодпоинты - одной строкой "XXXX..YYYY"
pub fn render_listing(property: &str, set: &CodepointSet) -> String
{
    let mut output = String::new();

    for token in set.tokens() {
        let _ = match token {
            RangeToken::Point(code) => writeln!(output, "{:04X}          ; {}", code, property),
            RangeToken::Range(low, high) => writeln!(output, "{:04X}..{:04X}    ; {}", low, high, property),
        };
    }

    output
}
