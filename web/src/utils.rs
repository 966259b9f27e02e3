use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Local storage slot a preference type is saved under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: StorageKey + Sized {
    fn local_or_default() -> Self;

    fn local_save(&self);
}

impl<T> LocalOrDefault for T
where
    T: StorageKey + Serialize + DeserializeOwned + Default,
{
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("no stored value for {}: {:?}", T::KEY, err);
            T::default()
        })
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}
