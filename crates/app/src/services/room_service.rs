//! Room service: lifecycle and batch provisioning of room inventory.

use std::collections::HashSet;

use hotelhub_domain::audit::AuditEvent;
use hotelhub_domain::error::{ConflictError, HotelError, NotFoundError, ValidationError};
use hotelhub_domain::id::RoomId;
use hotelhub_domain::page::{Page, PageRequest};
use hotelhub_domain::room::{
    BatchReport, MAX_BATCH_SIZE, NewRoom, Room, RoomPatch, RoomStatus, classify_batch,
};

use crate::ports::{AuditSink, RoomFilter, RoomRepository};

/// Application service owning every room business rule.
///
/// Holds no mutable state of its own: all durable state lives behind `R`.
pub struct RoomService<R, A> {
    repo: R,
    audit: A,
}

fn room_not_found(id: RoomId) -> HotelError {
    NotFoundError {
        entity: "Room",
        id: id.to_string(),
    }
    .into()
}

impl<R: RoomRepository, A: AuditSink> RoomService<R, A> {
    /// Create a new service backed by the given repository and audit sink.
    pub fn new(repo: R, audit: A) -> Self {
        Self { repo, audit }
    }

    /// Create a single room with status `available`.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] for a malformed intent,
    /// [`HotelError::Conflict`] when the room number is taken, or
    /// [`HotelError::Database`] when the store fails.
    pub async fn create_room(&self, room: NewRoom) -> Result<Room, HotelError> {
        room.validate()?;

        let exists = self
            .repo
            .exists_by_room_number(&room.room_number)
            .await
            .map_err(|err| err.during("check room number"))?;
        if exists {
            return Err(ConflictError {
                room_number: room.room_number,
            }
            .into());
        }

        let created = self
            .repo
            .insert(room)
            .await
            .map_err(|err| err.during("create room"))?;

        tracing::debug!(id = %created.id, room_number = %created.room_number, "room created");
        self.audit.record(AuditEvent::RoomCreated {
            id: created.id,
            room_number: created.room_number.clone(),
        });
        Ok(created)
    }

    /// Look up a room by key.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when absent, or a database error.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, HotelError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|err| err.during("find room"))?
            .ok_or_else(|| room_not_found(id))
    }

    /// Apply a partial update and persist the merged record.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when absent, or a database error.
    pub async fn update_room(&self, id: RoomId, patch: RoomPatch) -> Result<Room, HotelError> {
        let mut room = self.get_room(id).await?;
        let changed = patch.apply_to(&mut room);
        tracing::debug!(%id, changed, "room patched");

        let updated = self
            .repo
            .update(room)
            .await
            .map_err(|err| err.during("update room"))?
            .ok_or_else(|| room_not_found(id))?;

        self.audit.record(AuditEvent::RoomUpdated { id });
        Ok(updated)
    }

    /// Delete a room after checking it exists.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when absent, or a database error.
    pub async fn delete_room(&self, id: RoomId) -> Result<(), HotelError> {
        self.get_room(id).await?;
        self.repo
            .delete(id)
            .await
            .map_err(|err| err.during("delete room"))?;

        self.audit.record(AuditEvent::RoomDeleted { id });
        Ok(())
    }

    /// Change only the status of a room.
    ///
    /// The status text is parsed before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] for an unknown status,
    /// [`HotelError::NotFound`] when no room has `id`, or a database error.
    pub async fn update_room_status(&self, id: RoomId, status: &str) -> Result<(), HotelError> {
        let status: RoomStatus = status.parse()?;

        let matched = self
            .repo
            .update_status(id, status)
            .await
            .map_err(|err| err.during("update room status"))?;
        if !matched {
            return Err(room_not_found(id));
        }

        self.audit
            .record(AuditEvent::RoomStatusChanged { id, status });
        Ok(())
    }

    /// Every room, paginated.
    ///
    /// # Errors
    ///
    /// Returns a database error when the store fails.
    pub async fn list_rooms(&self, page: PageRequest) -> Result<Page<Room>, HotelError> {
        self.find_page(RoomFilter::All, page, "list rooms").await
    }

    /// Rooms with status `available`, paginated.
    ///
    /// # Errors
    ///
    /// Returns a database error when the store fails.
    pub async fn list_available_rooms(&self, page: PageRequest) -> Result<Page<Room>, HotelError> {
        self.find_page(
            RoomFilter::Status(RoomStatus::Available),
            page,
            "list available rooms",
        )
        .await
    }

    /// Rooms whose type equals `room_type` exactly, paginated.
    ///
    /// # Errors
    ///
    /// Returns a database error when the store fails.
    pub async fn search_rooms_by_type(
        &self,
        room_type: &str,
        page: PageRequest,
    ) -> Result<Page<Room>, HotelError> {
        self.find_page(
            RoomFilter::RoomType(room_type.to_owned()),
            page,
            "search rooms by type",
        )
        .await
    }

    /// Rooms on `floor`, paginated.
    ///
    /// # Errors
    ///
    /// Returns a database error when the store fails.
    pub async fn list_rooms_by_floor(
        &self,
        floor: i32,
        page: PageRequest,
    ) -> Result<Page<Room>, HotelError> {
        self.find_page(RoomFilter::Floor(floor), page, "list rooms by floor")
            .await
    }

    /// Rooms priced within `[min_price, max_price]`, paginated.
    ///
    /// # Errors
    ///
    /// Returns a database error when the store fails.
    pub async fn search_rooms_by_price(
        &self,
        min_price: f64,
        max_price: f64,
        page: PageRequest,
    ) -> Result<Page<Room>, HotelError> {
        self.find_page(
            RoomFilter::PriceRange {
                min: min_price,
                max: max_price,
            },
            page,
            "search rooms by price",
        )
        .await
    }

    /// Create up to [`MAX_BATCH_SIZE`] rooms with one existence check and one
    /// bulk insert.
    ///
    /// Intents that repeat an earlier room number in the same request, or
    /// that collide with a stored room, are reported as failed. The rest are
    /// inserted atomically.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] when the list is empty, too long,
    /// or contains a malformed intent. Returns a database error when either
    /// store call fails, in which case nothing was created.
    pub async fn batch_create_rooms(
        &self,
        intents: Vec<NewRoom>,
    ) -> Result<BatchReport, HotelError> {
        if intents.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }
        if intents.len() > MAX_BATCH_SIZE {
            return Err(ValidationError::BatchTooLarge {
                max: MAX_BATCH_SIZE,
                actual: intents.len(),
            }
            .into());
        }
        for (index, intent) in intents.iter().enumerate() {
            intent
                .validate()
                .map_err(|reason| ValidationError::InvalidBatchItem {
                    index,
                    reason: Box::new(reason),
                })?;
        }

        let room_numbers: Vec<String> = intents.iter().map(|r| r.room_number.clone()).collect();
        let existing: HashSet<String> = self
            .repo
            .find_existing_room_numbers(&room_numbers)
            .await
            .map_err(|err| err.during("check existing room numbers"))?
            .into_iter()
            .collect();

        let (to_create, failed) = classify_batch(intents, &existing);

        let created = if to_create.is_empty() {
            Vec::new()
        } else {
            self.repo
                .insert_many(to_create)
                .await
                .map_err(|err| err.during("batch create rooms"))?
        };

        let report = BatchReport::new(created, failed);
        tracing::info!(
            created = report.success_count,
            failed = report.failed_count,
            "batch room creation finished"
        );
        self.audit.record(AuditEvent::RoomsBatchCreated {
            created: report.success_count,
            failed: report.failed_count,
        });
        Ok(report)
    }

    async fn find_page(
        &self,
        filter: RoomFilter,
        page: PageRequest,
        operation: &'static str,
    ) -> Result<Page<Room>, HotelError> {
        self.repo
            .find_page(filter, page)
            .await
            .map_err(|err| err.during(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelhub_domain::error::DatabaseError;
    use hotelhub_domain::room::FailureReason;
    use hotelhub_domain::time::now;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct State {
        rooms: BTreeMap<RoomId, Room>,
        next_id: i64,
        calls: Vec<&'static str>,
        fail_bulk_insert: bool,
        delete_before_update: bool,
    }

    #[derive(Clone, Default)]
    struct InMemoryRoomRepo {
        state: Arc<Mutex<State>>,
    }

    impl InMemoryRoomRepo {
        fn failing_bulk_insert() -> Self {
            let repo = Self::default();
            repo.state.lock().unwrap().fail_bulk_insert = true;
            repo
        }

        /// Drops the target row just before every `update`, as a concurrent delete would.
        fn deleting_before_update() -> Self {
            let repo = Self::default();
            repo.state.lock().unwrap().delete_before_update = true;
            repo
        }
    }

    fn store_failure() -> HotelError {
        DatabaseError::new(std::io::Error::other("connection reset")).into()
    }

    impl State {
        fn has_number(&self, number: &str) -> bool {
            self.rooms.values().any(|r| r.room_number == number)
        }

        fn allocate(&mut self, room: NewRoom) -> Room {
            self.next_id += 1;
            let room = room.into_room(RoomId::new(self.next_id), now());
            self.rooms.insert(room.id, room.clone());
            room
        }
    }

    impl RoomRepository for InMemoryRoomRepo {
        fn insert(&self, room: NewRoom) -> impl Future<Output = Result<Room, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("insert");
            let result = if state.has_number(&room.room_number) {
                Err(ConflictError {
                    room_number: room.room_number,
                }
                .into())
            } else {
                Ok(state.allocate(room))
            };
            async move { result }
        }

        fn insert_many(
            &self,
            rooms: Vec<NewRoom>,
        ) -> impl Future<Output = Result<Vec<Room>, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("insert_many");
            let result = if state.fail_bulk_insert
                || rooms.iter().any(|r| state.has_number(&r.room_number))
            {
                Err(store_failure())
            } else {
                Ok(rooms.into_iter().map(|r| state.allocate(r)).collect())
            };
            async move { result }
        }

        fn get_by_id(
            &self,
            id: RoomId,
        ) -> impl Future<Output = Result<Option<Room>, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("get_by_id");
            let result = state.rooms.get(&id).cloned();
            async move { Ok(result) }
        }

        fn exists_by_room_number(
            &self,
            room_number: &str,
        ) -> impl Future<Output = Result<bool, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("exists_by_room_number");
            let result = state.has_number(room_number);
            async move { Ok(result) }
        }

        fn find_existing_room_numbers(
            &self,
            room_numbers: &[String],
        ) -> impl Future<Output = Result<Vec<String>, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("find_existing_room_numbers");
            let result: Vec<String> = room_numbers
                .iter()
                .filter(|n| state.has_number(n))
                .cloned()
                .collect();
            async move { Ok(result) }
        }

        fn find_page(
            &self,
            filter: RoomFilter,
            page: PageRequest,
        ) -> impl Future<Output = Result<Page<Room>, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("find_page");
            let matching: Vec<Room> = state
                .rooms
                .values()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect();
            let total = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip(usize::try_from(page.offset()).unwrap())
                .take(usize::try_from(page.limit()).unwrap())
                .collect();
            async move { Ok(Page::new(items, total)) }
        }

        fn update(
            &self,
            room: Room,
        ) -> impl Future<Output = Result<Option<Room>, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("update");
            if state.delete_before_update {
                state.rooms.remove(&room.id);
            }
            let mut room = room;
            room.updated_at = now();
            let result = match state.rooms.get_mut(&room.id) {
                Some(stored) => {
                    *stored = room.clone();
                    Some(room)
                }
                None => None,
            };
            async move { Ok(result) }
        }

        fn update_status(
            &self,
            id: RoomId,
            status: RoomStatus,
        ) -> impl Future<Output = Result<bool, HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("update_status");
            let matched = match state.rooms.get_mut(&id) {
                Some(room) => {
                    room.status = status;
                    true
                }
                None => false,
            };
            async move { Ok(matched) }
        }

        fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), HotelError>> + Send {
            let mut state = self.state.lock().unwrap();
            state.calls.push("delete");
            state.rooms.remove(&id);
            async move { Ok(()) }
        }
    }

    #[derive(Default)]
    struct RecordingAuditSink {
        events: Mutex<Vec<AuditEvent>>,
    }

    impl AuditSink for RecordingAuditSink {
        fn record(&self, event: AuditEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    type Service = RoomService<InMemoryRoomRepo, Arc<RecordingAuditSink>>;

    struct Fixture {
        svc: Service,
        repo: InMemoryRoomRepo,
        audit: Arc<RecordingAuditSink>,
    }

    impl Fixture {
        fn calls(&self) -> Vec<&'static str> {
            self.repo.state.lock().unwrap().calls.clone()
        }

        fn clear_calls(&self) {
            self.repo.state.lock().unwrap().calls.clear();
        }

        fn room_count(&self) -> usize {
            self.repo.state.lock().unwrap().rooms.len()
        }
    }

    fn fixture_with(repo: InMemoryRoomRepo) -> Fixture {
        let audit = Arc::new(RecordingAuditSink::default());
        Fixture {
            svc: RoomService::new(repo.clone(), Arc::clone(&audit)),
            repo,
            audit,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(InMemoryRoomRepo::default())
    }

    fn intent(number: &str) -> NewRoom {
        NewRoom::builder()
            .room_number(number)
            .room_type("Standard")
            .floor(1)
            .price(100.0)
            .capacity(2)
            .build()
            .unwrap()
    }

    fn typed_intent(number: &str, room_type: &str, floor: i32, price: f64) -> NewRoom {
        NewRoom {
            room_type: room_type.to_string(),
            floor,
            price,
            ..intent(number)
        }
    }

    // -----------------------------------------------------------------------
    // Single-entity operations
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_create_room_with_available_status() {
        let fx = fixture();
        let room = fx.svc.create_room(intent("101")).await.unwrap();

        assert_eq!(room.room_number, "101");
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(
            fx.audit.events.lock().unwrap().as_slice(),
            &[AuditEvent::RoomCreated {
                id: room.id,
                room_number: "101".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn should_return_conflict_when_room_number_taken() {
        let fx = fixture();
        fx.svc.create_room(intent("101")).await.unwrap();

        let result = fx.svc.create_room(intent("101")).await;
        assert!(matches!(result, Err(HotelError::Conflict(_))));
        assert_eq!(fx.room_count(), 1);
    }

    #[tokio::test]
    async fn should_reject_invalid_intent_without_touching_store() {
        let fx = fixture();
        let mut bad = intent("101");
        bad.price = 0.0;

        let result = fx.svc.create_room(bad).await;
        assert!(matches!(
            result,
            Err(HotelError::Validation(ValidationError::NonPositivePrice))
        ));
        assert!(fx.calls().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_room_missing() {
        let fx = fixture();
        let result = fx.svc.get_room(RoomId::new(404)).await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_identical_room_on_repeated_reads() {
        let fx = fixture();
        let created = fx.svc.create_room(intent("101")).await.unwrap();

        let first = fx.svc.get_room(created.id).await.unwrap();
        let second = fx.svc.get_room(created.id).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, created);
    }

    #[tokio::test]
    async fn should_leave_price_unchanged_when_update_supplies_zero() {
        let fx = fixture();
        let created = fx.svc.create_room(intent("101")).await.unwrap();

        let patch = RoomPatch {
            price: Some(0.0),
            ..RoomPatch::default()
        };
        let updated = fx.svc.update_room(created.id, patch).await.unwrap();

        assert!((updated.price - 100.0).abs() < f64::EPSILON);
        let stored = fx.svc.get_room(created.id).await.unwrap();
        assert!((stored.price - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_persist_supplied_fields_on_update() {
        let fx = fixture();
        let created = fx.svc.create_room(intent("101")).await.unwrap();

        let patch = RoomPatch {
            room_type: Some("Suite".to_string()),
            capacity: Some(4),
            ..RoomPatch::default()
        };
        fx.svc.update_room(created.id, patch).await.unwrap();

        let stored = fx.svc.get_room(created.id).await.unwrap();
        assert_eq!(stored.room_type, "Suite");
        assert_eq!(stored.capacity, 4);
        assert_eq!(stored.room_number, "101");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_room() {
        let fx = fixture();
        let result = fx
            .svc
            .update_room(RoomId::new(9), RoomPatch::default())
            .await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
        assert!(!fx.calls().contains(&"update"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_room_deleted_before_update_write() {
        let fx = fixture_with(InMemoryRoomRepo::deleting_before_update());
        let created = fx.svc.create_room(intent("101")).await.unwrap();

        let patch = RoomPatch {
            price: Some(150.0),
            ..RoomPatch::default()
        };
        let result = fx.svc.update_room(created.id, patch).await;

        assert!(matches!(result, Err(HotelError::NotFound(_))));
        assert!(fx.calls().contains(&"update"));
        assert_eq!(fx.room_count(), 0);
        assert!(
            !fx.audit
                .events
                .lock()
                .unwrap()
                .contains(&AuditEvent::RoomUpdated { id: created.id })
        );
    }

    #[tokio::test]
    async fn should_delete_existing_room() {
        let fx = fixture();
        let created = fx.svc.create_room(intent("101")).await.unwrap();

        fx.svc.delete_room(created.id).await.unwrap();

        let result = fx.svc.get_room(created.id).await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_room() {
        let fx = fixture();
        let result = fx.svc.delete_room(RoomId::new(77)).await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
        assert!(!fx.calls().contains(&"delete"));
    }

    #[tokio::test]
    async fn should_reject_unknown_status_without_touching_store() {
        let fx = fixture();
        let created = fx.svc.create_room(intent("101")).await.unwrap();
        fx.clear_calls();

        let result = fx.svc.update_room_status(created.id, "vip").await;
        assert!(matches!(
            result,
            Err(HotelError::Validation(ValidationError::InvalidStatus(_)))
        ));
        assert!(fx.calls().is_empty());
    }

    #[tokio::test]
    async fn should_update_status_when_valid() {
        let fx = fixture();
        let created = fx.svc.create_room(intent("101")).await.unwrap();

        fx.svc
            .update_room_status(created.id, "maintenance")
            .await
            .unwrap();

        let stored = fx.svc.get_room(created.id).await.unwrap();
        assert_eq!(stored.status, RoomStatus::Maintenance);
    }

    #[tokio::test]
    async fn should_return_not_found_when_status_target_missing() {
        let fx = fixture();
        let result = fx.svc.update_room_status(RoomId::new(5), "occupied").await;
        assert!(matches!(result, Err(HotelError::NotFound(_))));
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_clamp_oversized_page_request() {
        let fx = fixture();
        for n in 0..15 {
            fx.svc.create_room(intent(&format!("R{n}"))).await.unwrap();
        }

        let page = PageRequest::new(0, 500);
        let result = fx.svc.list_rooms(page).await.unwrap();

        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 10);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.total, 15);
        assert_eq!(result.total_pages(page.page_size()), 2);
    }

    #[tokio::test]
    async fn should_return_second_page_remainder() {
        let fx = fixture();
        for n in 0..15 {
            fx.svc.create_room(intent(&format!("R{n}"))).await.unwrap();
        }

        let result = fx.svc.list_rooms(PageRequest::new(2, 10)).await.unwrap();
        assert_eq!(result.items.len(), 5);
    }

    #[tokio::test]
    async fn should_list_only_available_rooms() {
        let fx = fixture();
        let a = fx.svc.create_room(intent("A")).await.unwrap();
        fx.svc.create_room(intent("B")).await.unwrap();
        fx.svc.update_room_status(a.id, "occupied").await.unwrap();

        let result = fx
            .svc
            .list_available_rooms(PageRequest::default())
            .await
            .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].room_number, "B");
    }

    #[tokio::test]
    async fn should_filter_by_type_floor_and_price() {
        let fx = fixture();
        fx.svc
            .create_room(typed_intent("101", "Standard", 1, 80.0))
            .await
            .unwrap();
        fx.svc
            .create_room(typed_intent("201", "Suite", 2, 300.0))
            .await
            .unwrap();
        fx.svc
            .create_room(typed_intent("202", "Standard", 2, 120.0))
            .await
            .unwrap();

        let page = PageRequest::default();
        let by_type = fx.svc.search_rooms_by_type("Standard", page).await.unwrap();
        assert_eq!(by_type.total, 2);

        let by_floor = fx.svc.list_rooms_by_floor(2, page).await.unwrap();
        assert_eq!(by_floor.total, 2);

        let by_price = fx
            .svc
            .search_rooms_by_price(80.0, 120.0, page)
            .await
            .unwrap();
        let numbers: Vec<&str> = by_price
            .items
            .iter()
            .map(|r| r.room_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["101", "202"]);
    }

    // -----------------------------------------------------------------------
    // Batch provisioning
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_create_first_occurrence_and_fail_in_request_duplicate() {
        let fx = fixture();
        let report = fx
            .svc
            .batch_create_rooms(vec![intent("A"), intent("A"), intent("B")])
            .await
            .unwrap();

        assert_eq!(report.success_count, 2);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.failed_rooms[0].room_number, "A");
        assert_eq!(
            report.failed_rooms[0].reason,
            FailureReason::DuplicateWithinRequest
        );
        assert!(
            report
                .created_rooms
                .iter()
                .all(|r| r.status == RoomStatus::Available)
        );
        assert_eq!(fx.room_count(), 2);
    }

    #[tokio::test]
    async fn should_fail_intents_that_already_exist_in_store() {
        let fx = fixture();
        fx.svc.create_room(intent("101")).await.unwrap();

        let report = fx
            .svc
            .batch_create_rooms(vec![intent("101"), intent("102")])
            .await
            .unwrap();

        assert_eq!(report.success_count, 1);
        assert_eq!(report.created_rooms[0].room_number, "102");
        assert_eq!(report.failed_rooms[0].reason, FailureReason::AlreadyExists);
    }

    #[tokio::test]
    async fn should_use_one_existence_check_and_one_bulk_insert() {
        let fx = fixture();
        fx.svc
            .batch_create_rooms((0..20).map(|n| intent(&format!("R{n}"))).collect())
            .await
            .unwrap();

        assert_eq!(fx.calls(), vec!["find_existing_room_numbers", "insert_many"]);
    }

    #[tokio::test]
    async fn should_skip_insert_when_every_intent_fails() {
        let fx = fixture();
        fx.svc.create_room(intent("101")).await.unwrap();
        fx.clear_calls();

        let report = fx.svc.batch_create_rooms(vec![intent("101")]).await.unwrap();

        assert_eq!(report.success_count, 0);
        assert_eq!(fx.calls(), vec!["find_existing_room_numbers"]);
    }

    #[tokio::test]
    async fn should_reject_more_than_hundred_intents() {
        let fx = fixture();
        let intents = (0..=MAX_BATCH_SIZE)
            .map(|n| intent(&format!("R{n}")))
            .collect();

        let result = fx.svc.batch_create_rooms(intents).await;
        assert!(matches!(
            result,
            Err(HotelError::Validation(ValidationError::BatchTooLarge {
                max: 100,
                actual: 101
            }))
        ));
        assert_eq!(fx.room_count(), 0);
        assert!(fx.calls().is_empty());
    }

    #[tokio::test]
    async fn should_accept_exactly_hundred_intents() {
        let fx = fixture();
        let intents = (0..MAX_BATCH_SIZE)
            .map(|n| intent(&format!("R{n}")))
            .collect();

        let report = fx.svc.batch_create_rooms(intents).await.unwrap();
        assert_eq!(report.success_count, 100);
    }

    #[tokio::test]
    async fn should_reject_empty_batch() {
        let fx = fixture();
        let result = fx.svc.batch_create_rooms(vec![]).await;
        assert!(matches!(
            result,
            Err(HotelError::Validation(ValidationError::EmptyBatch))
        ));
    }

    #[tokio::test]
    async fn should_name_index_of_malformed_intent() {
        let fx = fixture();
        let mut bad = intent("B");
        bad.capacity = 0;

        let result = fx.svc.batch_create_rooms(vec![intent("A"), bad]).await;
        match result {
            Err(HotelError::Validation(ValidationError::InvalidBatchItem { index, reason })) => {
                assert_eq!(index, 1);
                assert_eq!(*reason, ValidationError::NonPositiveCapacity);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(fx.calls().is_empty());
    }

    #[tokio::test]
    async fn should_surface_bulk_insert_failure_as_database_error() {
        let fx = fixture_with(InMemoryRoomRepo::failing_bulk_insert());

        let result = fx
            .svc
            .batch_create_rooms(vec![intent("A"), intent("B")])
            .await;

        match result {
            Err(HotelError::Database(err)) => assert_eq!(err.operation, "batch create rooms"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(fx.room_count(), 0);
        assert!(fx.audit.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_record_batch_audit_event() {
        let fx = fixture();
        fx.svc
            .batch_create_rooms(vec![intent("A"), intent("A")])
            .await
            .unwrap();

        assert_eq!(
            fx.audit.events.lock().unwrap().as_slice(),
            &[AuditEvent::RoomsBatchCreated {
                created: 1,
                failed: 1
            }]
        );
    }
}
