use crate::ranges::RangeToken;
use crate::DOMAIN_MAX;

const WORD_BITS: u32 = u64::BITS;
const WORDS: usize = (DOMAIN_MAX / WORD_BITS) as usize + 1;

/// множество кодпоинтов 0 ..= DOMAIN_MAX, битовая карта фиксированного размера
#[derive(Clone, PartialEq, Eq)]
pub struct CodepointSet
{
    words: Vec<u64>,
    len: usize,
}

impl CodepointSet
{
    pub fn new() -> Self
    {
        Self {
            words: vec![0; WORDS],
            len: 0,
        }
    }

    /// добавить кодпоинт. кодпоинты за пределами домена не добавляются.
    /// возвращает true, если кодпоинта в множестве ещё не было
    pub fn insert(&mut self, code: u32) -> bool
    {
        if code > DOMAIN_MAX {
            return false;
        }

        let word = &mut self.words[(code / WORD_BITS) as usize];
        let mask = 1 << (code % WORD_BITS);

        if *word & mask != 0 {
            return false;
        }

        *word |= mask;
        self.len += 1;

        true
    }

    pub fn insert_token(&mut self, token: &RangeToken)
    {
        for code in token.iter() {
            self.insert(code);
        }
    }

    pub fn contains(&self, code: u32) -> bool
    {
        code <= DOMAIN_MAX && (self.words[(code / WORD_BITS) as usize] >> (code % WORD_BITS)) & 1 != 0
    }

    /// количество кодпоинтов в множестве
    pub fn len(&self) -> usize
    {
        self.len
    }

    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// кодпоинты по возрастанию
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_
    {
        (0 ..= DOMAIN_MAX).filter(move |&code| self.contains(code))
    }

    /// непрерывные отрезки множества по возрастанию; отрезок из одного кодпоинта - Point
    pub fn tokens(&self) -> Vec<RangeToken>
    {
        let mut tokens = vec![];
        let mut run: Option<(u32, u32)> = None;

        for code in self.iter() {
            run = match run {
                Some((low, high)) if high + 1 == code => Some((low, code)),
                Some((low, high)) => {
                    tokens.push(token(low, high));
                    Some((code, code))
                }
                None => Some((code, code)),
            };
        }

        if let Some((low, high)) = run {
            tokens.push(token(low, high));
        }

        tokens
    }
}

fn token(low: u32, high: u32) -> RangeToken
{
    match low == high {
        true => RangeToken::Point(low),
        false => RangeToken::Range(low, high),
    }
}

impl Default for CodepointSet
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl FromIterator<u32> for CodepointSet
{
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self
    {
        let mut set = CodepointSet::new();

        for code in iter {
            set.insert(code);
        }

        set
    }
}

impl std::fmt::Debug for CodepointSet
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("CodepointSet").field("len", &self.len).finish()
    }
}
