//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{BookingError, DomainError};

use super::trait_::{BookingListFilter, BookingRepository};

/// Mock booking repository backed by an in-memory map.
///
/// `create` is a bare insert, so driving the service-level check-then-insert
/// path through it reproduces the creation race. `create_if_free` holds the
/// write lock across the conflict re-check and the insert, which models a
/// serializable transaction at the store.
#[derive(Clone)]
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed an existing booking
    pub async fn seed(&self, booking: Booking) {
        self.bookings.write().await.insert(booking.id, booking);
    }

    /// Number of stored bookings
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Whether no bookings are stored
    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn overlapping<'a>(
    bookings: impl Iterator<Item = &'a Booking>,
    tutor_id: Uuid,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<Booking> {
    let mut found: Vec<Booking> = bookings
        .filter(|b| b.tutor_id == tutor_id && b.is_active() && b.overlaps(start, end))
        .cloned()
        .collect();
    found.sort_by_key(|b| b.start_time);
    found
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn create_if_free(&self, booking: Booking) -> Result<Booking, DomainError> {
        // Check and insert under one write lock
        let mut bookings = self.bookings.write().await;

        let conflicts = overlapping(
            bookings.values(),
            booking.tutor_id,
            booking.start_time,
            booking.end_time,
        );
        if !conflicts.is_empty() {
            return Err(DomainError::Booking(BookingError::TimeConflict));
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;

        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking"));
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_overlapping(
        &self,
        tutor_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(overlapping(bookings.values(), tutor_id, start, end))
    }

    async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;

        let mut matched: Vec<Booking> = bookings
            .values()
            .filter(|b| filter.student_id.map_or(true, |id| b.student_id == id))
            .filter(|b| filter.tutor_id.map_or(true, |id| b.tutor_id == id))
            .filter(|b| filter.status.map_or(true, |s| b.status == s))
            .filter(|b| filter.start_from.map_or(true, |t| b.start_time >= t))
            .filter(|b| filter.end_until.map_or(true, |t| b.end_time <= t))
            .cloned()
            .collect();

        // Newest start time first
        matched.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(matched)
    }
}
