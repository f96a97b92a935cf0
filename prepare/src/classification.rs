use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::output::OutputFormat;

/// класс символов идентификатора, для которого строится таблица
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification
{
    /// символы, с которых может начинаться идентификатор
    XidStart,
    /// символы, допустимые в остальной части идентификатора
    XidContinue,
}

impl Classification
{
    pub const ALL: [Classification; 2] = [Classification::XidStart, Classification::XidContinue];

    pub fn name(&self) -> &'static str
    {
        match self {
            Classification::XidStart => "XID_START",
            Classification::XidContinue => "XID_CONTINUE",
        }
    }

    /// файл со списком диапазонов
    pub fn input_file_name(&self) -> String
    {
        format!("{}.txt", self.name())
    }

    /// файл со сгенерированной таблицей
    pub fn output_file_name(&self, format: OutputFormat) -> String
    {
        format!("{}.{}", self.name(), format.extension())
    }

    pub fn max_constant_name(&self) -> String
    {
        format!("MAX_{}", self.name())
    }

    pub fn table_name(&self) -> String
    {
        format!("{}_TABLE", self.name())
    }
}

impl FromStr for Classification
{
    type Err = Error;

    /// пробелы внутри аргумента не учитываются: "XID_ START" == "XID_START"
    fn from_str(arg: &str) -> Result<Self, Self::Err>
    {
        let name: String = arg.chars().filter(|c| !c.is_whitespace()).collect();

        Classification::ALL
            .into_iter()
            .find(|classification| classification.name() == name)
            .ok_or_else(|| Error::UnknownClassification(arg.to_owned()))
    }
}

impl fmt::Display for Classification
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}
