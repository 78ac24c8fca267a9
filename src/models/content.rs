/// Resolved birthday message content for one matched row.
#[derive(Debug, Clone)]
pub struct BirthdayContent {
    pub template_no: u8,
    pub quote: String,
    pub author: String,
    pub rendered_quote: String,
}

/// Resolved anniversary message content for one matched row.
///
/// Tenure is a simple year difference (current calendar year minus the
/// 4-digit year component of the join date), not floor-of-elapsed-time.
#[derive(Debug, Clone)]
pub struct AnniversaryContent {
    pub template_no: u8,
    pub tenure_years: i32,
}
