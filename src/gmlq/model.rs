/// One directory entry projected to the three fields gmlq prints.
///
/// An attribute missing on the source entry shows up as an empty string
/// here; absence is normal, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRecord {
    pub mail: String,
    pub name: String,
    pub title: String,
}
