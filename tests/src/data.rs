use xid_tables_prepare::Classification;

lazy_static! {
    /// списки диапазонов в формате DerivedCoreProperties.txt, составленные по unicode-ident
    pub static ref XID_START: String = xid_tables_benches::source(Classification::XidStart);
    pub static ref XID_CONTINUE: String = xid_tables_benches::source(Classification::XidContinue);
}
