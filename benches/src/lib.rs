use xid_tables_prepare::{render_listing, Classification, CodepointSet, DOMAIN_MAX};

/// список диапазонов класса в формате DerivedCoreProperties.txt (по данным unicode-ident)
pub fn source(classification: Classification) -> String
{
    let (property, is_member): (&str, fn(char) -> bool) = match classification {
        Classification::XidStart => ("XID_Start", unicode_ident::is_xid_start),
        Classification::XidContinue => ("XID_Continue", unicode_ident::is_xid_continue),
    };

    let set: CodepointSet = (0 ..= DOMAIN_MAX)
        .filter(|&code| char::from_u32(code).map_or(false, is_member))
        .collect();

    render_listing(property, &set)
}

/// текст на разных письменностях для замеров поиска по таблице
pub const TEXT: &str = "identifier_1 идентификатор ταυτότητα 識別子 식별자 מזהה معرّف पहचानकर्ता \
                        𠀀𠀁𠀂 𰀀𰀁 ℮℘ ゛゜ _x9 ·ᐧ";
