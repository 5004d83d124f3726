// A FastA record split the way the downstream tools see it: the identifier is the header up to the
// first whitespace, the description is the whole header. Both are kept as text since dates are
// rewritten in place.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(id: &str, description: &str, sequence: &str) -> Self {
        SeqRecord {
            id: String::from(id),
            description: String::from(description),
            sequence: String::from(sequence),
        }
    }
}
