use crate::error::{Error, Result};
use crate::models::Favorite;
use crate::services::{delay, latency, FavoritePatch, NewFavorite};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::info;

/// Buffered snapshots a slow receiver may lag behind by before missing one
const CHANNEL_CAPACITY: usize = 16;

/// Mutable store for user bookmarks.
///
/// Mutations commit under one lock, then broadcast a fresh snapshot of the
/// whole collection to every subscriber. That fan-out is what keeps
/// independently rendered views (grid, list, detail, favorites page)
/// consistent without a shared top-level state container.
pub struct FavoriteService {
    favorites: Mutex<Vec<Favorite>>,
    events: broadcast::Sender<Vec<Favorite>>,
}

impl FavoriteService {
    pub fn new(seed: Vec<Favorite>) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            favorites: Mutex::new(seed),
            events,
        }
    }

    /// Register an observer. Every mutation delivers a copy of the full
    /// collection, in mutation order. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Favorite>> {
        self.events.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Favorite>> {
        // a poisoned lock only means another caller panicked mid-mutation;
        // the collection itself is still usable
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, snapshot: Vec<Favorite>) {
        // send only fails when nobody is subscribed
        let _ = self.events.send(snapshot);
    }

    pub async fn get_all(&self) -> Vec<Favorite> {
        delay(latency::FAVORITE_GET_ALL).await;
        self.lock().clone()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Favorite> {
        delay(latency::FAVORITE_GET_BY_ID).await;
        self.lock()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found("favorite", id))
    }

    /// Bookmark a property. The new id is `max(existing ids, 0) + 1`, so id
    /// assignment is stable across deletions and ids below the max are never
    /// reused. Duplicate bookmarks for one property are permitted; callers
    /// wanting toggle semantics check [`is_favorite`](Self::is_favorite)
    /// first.
    pub async fn create(&self, new: NewFavorite) -> Favorite {
        delay(latency::CREATE).await;
        let (favorite, snapshot) = {
            let mut favorites = self.lock();
            let next_id = favorites.iter().map(|f| f.id).max().unwrap_or(0).max(0) + 1;
            let favorite = Favorite {
                id: next_id,
                property_id: new.property_id,
                saved_date: Utc::now(),
                notes: new.notes.unwrap_or_default(),
            };
            favorites.push(favorite.clone());
            (favorite, favorites.clone())
        };
        info!(
            "saved favorite {} for property {}",
            favorite.id, favorite.property_id
        );
        self.notify(snapshot);
        favorite
    }

    /// Merge `patch` over the stored record. The id cannot change; the patch
    /// type carries no id field.
    pub async fn update(&self, id: i64, patch: FavoritePatch) -> Result<Favorite> {
        delay(latency::UPDATE).await;
        let (updated, snapshot) = {
            let mut favorites = self.lock();
            let favorite = favorites
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| Error::not_found("favorite", id))?;
            if let Some(notes) = patch.notes {
                favorite.notes = notes;
            }
            (favorite.clone(), favorites.clone())
        };
        self.notify(snapshot);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        delay(latency::DELETE).await;
        let snapshot = {
            let mut favorites = self.lock();
            let index = favorites
                .iter()
                .position(|f| f.id == id)
                .ok_or_else(|| Error::not_found("favorite", id))?;
            favorites.remove(index);
            favorites.clone()
        };
        info!("removed favorite {id}");
        self.notify(snapshot);
        Ok(())
    }

    /// Remove the first favorite referencing `property_id`.
    pub async fn delete_by_property_id(&self, property_id: &str) -> Result<()> {
        delay(latency::DELETE).await;
        let snapshot = {
            let mut favorites = self.lock();
            let index = favorites
                .iter()
                .position(|f| f.property_id == property_id)
                .ok_or_else(|| Error::not_found("favorite", property_id))?;
            favorites.remove(index);
            favorites.clone()
        };
        info!("removed favorite for property {property_id}");
        self.notify(snapshot);
        Ok(())
    }

    pub async fn is_favorite(&self, property_id: &str) -> bool {
        delay(latency::IS_FAVORITE).await;
        self.is_favorite_sync(property_id)
    }

    /// Membership test without the simulated latency, for render paths that
    /// cannot await.
    pub fn is_favorite_sync(&self, property_id: &str) -> bool {
        self.lock().iter().any(|f| f.property_id == property_id)
    }
}
