//! Record trait: identity for cached entities.

use crate::RecordId;

/// Anything the list stores can hold.
///
/// A record carries an id that is either assigned by the backend or generated
/// locally when it is added to a store before the server has answered.
pub trait Record: Clone + core::fmt::Debug {
    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);
}

/// Implement [`Record`] for structs with a public `id: RecordId` field.
#[macro_export]
macro_rules! impl_record {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Record for $t {
                fn id(&self) -> &$crate::RecordId {
                    &self.id
                }

                fn set_id(&mut self, id: $crate::RecordId) {
                    self.id = id;
                }
            }
        )+
    };
}
