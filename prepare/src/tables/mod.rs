mod codepoints;
pub use codepoints::CodepointSet;

use tracing::debug;
use xid_table::{XidTable, GROUP_BITS};

use crate::error::Error;
use crate::DOMAIN_MAX;

/// количество групп в таблице: ceil((DOMAIN_MAX + 1) / 8)
pub const GROUP_COUNT: usize = (DOMAIN_MAX as usize + 1).div_ceil(GROUP_BITS as usize);

/// упакованная таблица: группа g описывает кодпоинты 8g ..= 8g + 7,
/// младший бит группы - наименьший кодпоинт
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedTable
{
    groups: Vec<u8>,
}

impl PackedTable
{
    pub fn groups(&self) -> &[u8]
    {
        self.groups.as_slice()
    }

    /// количество групп
    pub fn len(&self) -> usize
    {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.groups.is_empty()
    }

    /// представление таблицы в том виде, в каком её использует код, включающий сгенерированный файл
    pub fn as_table(&self) -> XidTable<'_>
    {
        XidTable::new(DOMAIN_MAX, self.groups())
    }

    pub fn contains(&self, code: u32) -> bool
    {
        self.as_table().contains(code)
    }

    /// обратное преобразование: все установленные биты таблицы
    pub fn decode(&self) -> CodepointSet
    {
        let table = self.as_table();

        (0 ..= DOMAIN_MAX).filter(|&code| table.contains(code)).collect()
    }
}

/// упаковываем множество кодпоинтов: проходим весь домен по возрастанию, по одному разу на кодпоинт
pub fn pack(set: &CodepointSet) -> Result<PackedTable, Error>
{
    let mut groups = Vec::with_capacity(GROUP_COUNT);

    let mut group = 0u8;
    let mut filled = 0;

    for code in 0 ..= DOMAIN_MAX {
        if set.contains(code) {
            group |= 1 << filled;
        }

        filled += 1;

        if filled == GROUP_BITS {
            groups.push(group);
            group = 0;
            filled = 0;
        }
    }

    // последняя группа неполная: биты за DOMAIN_MAX остаются нулевыми
    if filled > 0 {
        groups.push(group & ((1u16 << filled) - 1) as u8);
    }

    if groups.len() != GROUP_COUNT {
        return Err(Error::GroupCountMismatch {
            expected: GROUP_COUNT,
            actual: groups.len(),
        });
    }

    debug!(groups = groups.len(), "lookup table packed");

    Ok(PackedTable { groups })
}
