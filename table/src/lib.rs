#![no_std]

/// количество кодпоинтов в одной группе упакованной таблицы
pub const GROUP_BITS: u32 = 8;

/// упакованная битовая таблица принадлежности кодпоинтов классу (XID_Start / XID_Continue)
///
/// группа g описывает кодпоинты 8g ..= 8g + 7, младший бит группы - наименьший кодпоинт
#[derive(Debug, Clone, Copy)]
pub struct XidTable<'a>
{
    /// последний кодпоинт, покрытый таблицей
    max: u32,
    /// группы по 8 бит
    groups: &'a [u8],
}

impl<'a> XidTable<'a>
{
    /// таблица из сгенерированных констант, например
    /// `XidTable::new(MAX_XID_START, &XID_START_TABLE)`
    pub const fn new(max: u32, groups: &'a [u8]) -> Self
    {
        Self { max, groups }
    }

    /// входит ли кодпоинт в таблицу?
    #[inline(always)]
    pub fn contains(&self, code: u32) -> bool
    {
        if code > self.max {
            return false;
        }

        match self.groups.get((code / GROUP_BITS) as usize) {
            Some(group) => (group >> (code % GROUP_BITS)) & 1 != 0,
            None => false,
        }
    }

    #[inline(always)]
    pub fn contains_char(&self, c: char) -> bool
    {
        self.contains(u32::from(c))
    }

    pub fn max(&self) -> u32
    {
        self.max
    }

    pub fn groups(&self) -> &'a [u8]
    {
        self.groups
    }
}
