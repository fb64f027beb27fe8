use crate::bigint::BigInteger;
use serde::ser::{Serialize, Serializer};

/// Values that fit a machine integer are written as one, so self-describing
/// formats see an ordinary number. Anything wider is written as its decimal
/// string.
impl Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(n) = self.as_u64() {
            serializer.serialize_u64(n)
        } else if let Some(n) = self.as_i64() {
            serializer.serialize_i64(n)
        } else {
            serializer.collect_str(self)
        }
    }
}
