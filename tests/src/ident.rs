use xid_table::XidTable;
use xid_tables_prepare::{Classification, Generator, OutputFormat, DOMAIN_MAX, GROUP_COUNT};

use crate::data::{XID_CONTINUE, XID_START};

macro_rules! test {
    ($classification: expr, $source: expr, $reference: expr) => {
        let artifact = Generator::new($classification).render($source.as_str()).unwrap();
        let table = XidTable::new(DOMAIN_MAX, artifact.table.groups());

        assert_eq!(artifact.table.len(), GROUP_COUNT);

        for code in 0 ..= DOMAIN_MAX + 0x100 {
            let expected = code <= DOMAIN_MAX && char::from_u32(code).map_or(false, $reference);

            assert_eq!(table.contains(code), expected, "{} U+{:04X}", $classification, code);
        }
    };
}

/// сравниваем с unicode-ident
#[test]
fn xid_start()
{
    test!(Classification::XidStart, XID_START, unicode_ident::is_xid_start);
}

#[test]
fn xid_continue()
{
    test!(Classification::XidContinue, XID_CONTINUE, unicode_ident::is_xid_continue);
}

/// каждый XID_Start - также XID_Continue
#[test]
fn start_is_subset_of_continue()
{
    let start = Generator::new(Classification::XidStart).render(XID_START.as_str()).unwrap();
    let continuing = Generator::new(Classification::XidContinue).render(XID_CONTINUE.as_str()).unwrap();

    for code in start.set.iter() {
        assert!(continuing.set.contains(code), "U+{:04X}", code);
    }
}

/// сгенерированный Rust-файл содержит те же группы, что и таблица
#[test]
fn rust_output_matches_table()
{
    let mut generator = Generator::new(Classification::XidStart);
    generator.format = OutputFormat::Rust;

    let artifact = generator.render(XID_START.as_str()).unwrap();

    let groups: Vec<u8> = artifact
        .contents
        .lines()
        .filter(|line| line.starts_with("0b"))
        .flat_map(|line| line.split(", "))
        .filter(|literal| !literal.trim().is_empty())
        .map(|literal| u8::from_str_radix(literal.trim().trim_start_matches("0b"), 2).unwrap())
        .collect();

    assert_eq!(groups.as_slice(), artifact.table.groups());
}
