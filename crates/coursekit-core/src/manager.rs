//! Headless attachment manager.
//!
//! Owns the panel's local UI state through [`EditorState`], issues create and
//! delete requests, reports outcomes through a [`Notifier`], and asks a
//! [`Refresher`] to re-fetch the course after every successful mutation. The
//! attachment list itself is never mutated locally.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::AttachmentApi;
use crate::error::Result;
use crate::models::{Attachment, AttachmentId, CourseId, NewAttachment};
use crate::notice::{Notice, Notifier, Refresher};
use crate::upload::{UploadEndpoint, UploadedFile};
use crate::view::{
    AttachmentRow, PanelBody, PanelView, ADD_FILE_LABEL, CANCEL_LABEL, EMPTY_MESSAGE,
    PANEL_TITLE, UPLOAD_HINT,
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Course updated";
pub const DELETE_SUCCESS_MESSAGE: &str = "Attachment deleted";
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Component-local UI state.
///
/// Implementors are handles: clones must observe and mutate the same state.
pub trait EditorState {
    fn is_editing(&self) -> bool;
    fn set_editing(&mut self, editing: bool);
    fn deleting_id(&self) -> Option<AttachmentId>;
    fn set_deleting_id(&mut self, id: Option<AttachmentId>);
}

/// Plain snapshot of the editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub is_editing: bool,
    pub deleting_id: Option<AttachmentId>,
}

/// Thread-safe in-memory [`EditorState`] for headless use.
#[derive(Debug, Clone, Default)]
pub struct SharedEditorState {
    inner: Arc<Mutex<EditorSnapshot>>,
}

impl SharedEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, apply: impl FnOnce(&mut EditorSnapshot)) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut guard);
    }
}

impl EditorState for SharedEditorState {
    fn is_editing(&self) -> bool {
        self.snapshot().is_editing
    }

    fn set_editing(&mut self, editing: bool) {
        self.update(|state| state.is_editing = editing);
    }

    fn deleting_id(&self) -> Option<AttachmentId> {
        self.snapshot().deleting_id
    }

    fn set_deleting_id(&mut self, id: Option<AttachmentId>) {
        self.update(|state| state.deleting_id = id);
    }
}

/// Clears `deleting_id` when dropped, including when the delete future is
/// dropped mid-flight.
struct DeletingGuard<S: EditorState> {
    state: S,
}

impl<S: EditorState> DeletingGuard<S> {
    fn mark(mut state: S, id: AttachmentId) -> Self {
        state.set_deleting_id(Some(id));
        Self { state }
    }
}

impl<S: EditorState> Drop for DeletingGuard<S> {
    fn drop(&mut self) {
        self.state.set_deleting_id(None);
    }
}

/// Attachment manager for one course.
pub struct AttachmentManager<S, N, R> {
    course_id: CourseId,
    api: Arc<dyn AttachmentApi>,
    state: S,
    notifier: N,
    refresher: R,
}

impl<S, N, R> AttachmentManager<S, N, R>
where
    S: EditorState + Clone,
    N: Notifier,
    R: Refresher,
{
    pub fn new(
        course_id: CourseId,
        api: Arc<dyn AttachmentApi>,
        state: S,
        notifier: N,
        refresher: R,
    ) -> Self {
        Self {
            course_id,
            api,
            state,
            notifier,
            refresher,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub fn deleting_id(&self) -> Option<AttachmentId> {
        self.state.deleting_id()
    }

    /// Flip between the collapsed list and upload mode.
    pub fn toggle_edit(&self) {
        let mut state = self.state.clone();
        let editing = state.is_editing();
        state.set_editing(!editing);
    }

    /// Create an attachment from an upload result.
    ///
    /// On success the editor closes and a refresh is requested. On any
    /// failure a generic notice is shown and the editor stays as it was.
    pub async fn submit(&self, file: UploadedFile) -> bool {
        match self.create(file).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(SUBMIT_SUCCESS_MESSAGE));
                self.state.clone().set_editing(false);
                self.refresher.refresh();
                true
            }
            Err(error) => {
                tracing::warn!(course_id = %self.course_id, "Failed to create attachment: {}", error);
                self.notifier.notify(Notice::error(FAILURE_MESSAGE));
                false
            }
        }
    }

    async fn create(&self, file: UploadedFile) -> Result<()> {
        let attachment = NewAttachment::new(file.url, file.name)?;
        self.api
            .create_attachment(&self.course_id, &attachment)
            .await
    }

    /// Delete one attachment.
    ///
    /// `deleting_id` holds `id` while the request is pending and is cleared
    /// afterwards whatever the outcome.
    pub async fn delete_attachment(&self, id: AttachmentId) -> bool {
        let _deleting = DeletingGuard::mark(self.state.clone(), id.clone());

        match self.api.delete_attachment(&self.course_id, &id).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(DELETE_SUCCESS_MESSAGE));
                self.refresher.refresh();
                true
            }
            Err(error) => {
                tracing::warn!(
                    course_id = %self.course_id,
                    attachment_id = %id,
                    "Failed to delete attachment: {}",
                    error
                );
                self.notifier.notify(Notice::error(FAILURE_MESSAGE));
                false
            }
        }
    }

    /// Build the render model for the given attachments.
    pub fn view(&self, attachments: &[Attachment]) -> PanelView {
        if self.state.is_editing() {
            return PanelView {
                title: PANEL_TITLE,
                toggle_label: CANCEL_LABEL,
                body: PanelBody::Upload {
                    endpoint: UploadEndpoint::CourseAttachment,
                    hint: UPLOAD_HINT,
                },
            };
        }

        let body = if attachments.is_empty() {
            PanelBody::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            let deleting_id = self.state.deleting_id();
            PanelBody::List(
                attachments
                    .iter()
                    .map(|attachment| AttachmentRow {
                        id: attachment.id.clone(),
                        name: attachment.name.clone(),
                        url: attachment.url.clone(),
                        is_deleting: deleting_id.as_ref() == Some(&attachment.id),
                    })
                    .collect(),
            )
        };

        PanelView {
            title: PANEL_TITLE,
            toggle_label: ADD_FILE_LABEL,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::Course;
    use crate::notice::NoticeKind;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;
    use tokio::sync::{mpsc, oneshot};

    #[derive(Default)]
    struct MockApi {
        fail_create: bool,
        fail_delete: bool,
        created: Mutex<Vec<(String, String)>>,
        deleted: Mutex<Vec<String>>,
        gates: Mutex<HashMap<String, oneshot::Receiver<bool>>>,
        started: Mutex<Option<mpsc::UnboundedSender<AttachmentId>>>,
    }

    impl MockApi {
        fn failing() -> Self {
            Self {
                fail_create: true,
                fail_delete: true,
                ..Self::default()
            }
        }

        /// Hold the delete of `id` until the returned sender decides its outcome.
        fn gate(&self, id: &str) -> oneshot::Sender<bool> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(id.to_string(), rx);
            tx
        }

        fn watch_started(&self) -> mpsc::UnboundedReceiver<AttachmentId> {
            let (tx, rx) = mpsc::unbounded_channel();
            *self.started.lock().unwrap() = Some(tx);
            rx
        }

        fn created_count(&self) -> usize {
            self.created.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AttachmentApi for MockApi {
        async fn create_attachment(
            &self,
            _course_id: &CourseId,
            attachment: &NewAttachment,
        ) -> Result<()> {
            self.created
                .lock()
                .unwrap()
                .push((attachment.url().to_string(), attachment.name().to_string()));
            if self.fail_create {
                return Err(Error::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(())
        }

        async fn delete_attachment(
            &self,
            _course_id: &CourseId,
            attachment_id: &AttachmentId,
        ) -> Result<()> {
            self.deleted
                .lock()
                .unwrap()
                .push(attachment_id.as_str().to_string());
            if let Some(started) = self.started.lock().unwrap().as_ref() {
                let _ = started.send(attachment_id.clone());
            }

            let gate = self.gates.lock().unwrap().remove(attachment_id.as_str());
            let succeed = match gate {
                Some(rx) => rx.await.unwrap_or(false),
                None => !self.fail_delete,
            };
            if succeed {
                Ok(())
            } else {
                Err(Error::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            }
        }

        async fn fetch_course(&self, course_id: &CourseId) -> Result<Course> {
            Ok(Course {
                id: course_id.clone(),
                title: String::new(),
                attachments: Vec::new(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<Notice>>>);

    impl RecordingNotifier {
        fn kinds(&self) -> Vec<NoticeKind> {
            self.0.borrow().iter().map(|notice| notice.kind).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[derive(Clone, Default)]
    struct CountingRefresher(Rc<Cell<usize>>);

    impl Refresher for CountingRefresher {
        fn refresh(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    type TestManager = AttachmentManager<SharedEditorState, RecordingNotifier, CountingRefresher>;

    struct Harness {
        api: Arc<MockApi>,
        state: SharedEditorState,
        notifier: RecordingNotifier,
        refresher: CountingRefresher,
        manager: TestManager,
    }

    fn harness(api: MockApi) -> Harness {
        let api = Arc::new(api);
        let state = SharedEditorState::new();
        let notifier = RecordingNotifier::default();
        let refresher = CountingRefresher::default();
        let manager = AttachmentManager::new(
            CourseId::new("course-1"),
            api.clone(),
            state.clone(),
            notifier.clone(),
            refresher.clone(),
        );
        Harness {
            api,
            state,
            notifier,
            refresher,
            manager,
        }
    }

    fn syllabus() -> Vec<Attachment> {
        vec![Attachment::new("a1", "Syllabus.pdf", "https://x/1")]
    }

    #[test]
    fn test_toggle_edit_tracks_call_parity() {
        let h = harness(MockApi::default());
        assert!(!h.manager.is_editing());

        for calls in 1..=6 {
            h.manager.toggle_edit();
            assert_eq!(h.manager.is_editing(), calls % 2 == 1);
        }
    }

    #[test]
    fn test_view_empty_state() {
        let h = harness(MockApi::default());
        let view = h.manager.view(&[]);

        assert_eq!(view.title, PANEL_TITLE);
        assert_eq!(view.toggle_label, ADD_FILE_LABEL);
        assert_eq!(
            view.body,
            PanelBody::Empty {
                message: EMPTY_MESSAGE
            }
        );
        assert_eq!(view.row_count(), 0);
    }

    #[test]
    fn test_view_lists_rows_in_supplied_order() {
        let h = harness(MockApi::default());
        let attachments = vec![
            Attachment::new("a3", "Week 3.pdf", "https://x/3"),
            Attachment::new("a1", "Week 1.pdf", "https://x/1"),
            Attachment::new("a2", "Week 2.pdf", "https://x/2"),
        ];

        let view = h.manager.view(&attachments);
        let PanelBody::List(rows) = view.body else {
            panic!("expected list body");
        };
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();

        assert_eq!(names, vec!["Week 3.pdf", "Week 1.pdf", "Week 2.pdf"]);
        assert!(rows.iter().all(|row| !row.is_deleting));
    }

    #[test]
    fn test_view_marks_only_deleting_row() {
        let mut h = harness(MockApi::default());
        let attachments = vec![
            Attachment::new("a1", "Week 1.pdf", "https://x/1"),
            Attachment::new("a2", "Week 2.pdf", "https://x/2"),
        ];
        h.state.set_deleting_id(Some(AttachmentId::new("a2")));

        let PanelBody::List(rows) = h.manager.view(&attachments).body else {
            panic!("expected list body");
        };

        assert_eq!(
            rows.iter().map(|row| row.is_deleting).collect::<Vec<_>>(),
            vec![false, true]
        );
    }

    #[test]
    fn test_view_upload_mode_hides_list() {
        let h = harness(MockApi::default());
        h.manager.toggle_edit();

        let view = h.manager.view(&syllabus());

        assert_eq!(view.toggle_label, CANCEL_LABEL);
        assert_eq!(
            view.body,
            PanelBody::Upload {
                endpoint: UploadEndpoint::CourseAttachment,
                hint: UPLOAD_HINT,
            }
        );
        assert_eq!(view.row_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_success_closes_editor_and_refreshes_once() {
        let h = harness(MockApi::default());
        h.manager.toggle_edit();

        let ok = h
            .manager
            .submit(UploadedFile::new("https://x/1", "Syllabus.pdf"))
            .await;

        assert!(ok);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::Success]);
        assert_eq!(h.notifier.0.borrow()[0].message, SUBMIT_SUCCESS_MESSAGE);
        assert!(!h.manager.is_editing());
        assert_eq!(h.refresher.0.get(), 1);
        assert_eq!(
            *h.api.created.lock().unwrap(),
            vec![("https://x/1".to_string(), "Syllabus.pdf".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_editor_open() {
        let h = harness(MockApi::failing());
        h.manager.toggle_edit();

        let ok = h
            .manager
            .submit(UploadedFile::new("https://x/1", "Syllabus.pdf"))
            .await;

        assert!(!ok);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::Error]);
        assert_eq!(h.notifier.0.borrow()[0].message, FAILURE_MESSAGE);
        assert!(h.manager.is_editing());
        assert_eq!(h.refresher.0.get(), 0);
    }

    #[tokio::test]
    async fn test_submit_with_empty_fields_sends_nothing() {
        let h = harness(MockApi::default());
        h.manager.toggle_edit();

        assert!(!h.manager.submit(UploadedFile::new("", "x")).await);
        assert!(!h.manager.submit(UploadedFile::new("x", "")).await);

        assert_eq!(h.api.created_count(), 0);
        assert_eq!(h.refresher.0.get(), 0);
        assert!(h.manager.is_editing());
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::Error, NoticeKind::Error]);
    }

    #[tokio::test]
    async fn test_submit_sends_pair_unchanged() {
        let h = harness(MockApi::default());

        assert!(h.manager.submit(UploadedFile::new("https://x/1", " notes .pdf ")).await);
        assert!(h.manager.submit(UploadedFile::new("https://x/2", " ")).await);

        assert_eq!(
            *h.api.created.lock().unwrap(),
            vec![
                ("https://x/1".to_string(), " notes .pdf ".to_string()),
                ("https://x/2".to_string(), " ".to_string()),
            ]
        );
        assert_eq!(h.refresher.0.get(), 2);
    }

    #[tokio::test]
    async fn test_delete_success_scenario() {
        let h = harness(MockApi::default());
        let attachments = syllabus();

        let ok = h
            .manager
            .delete_attachment(attachments[0].id.clone())
            .await;

        assert!(ok);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::Success]);
        assert_eq!(h.notifier.0.borrow()[0].message, DELETE_SUCCESS_MESSAGE);
        assert_eq!(h.refresher.0.get(), 1);
        assert_eq!(h.manager.deleting_id(), None);
        assert_eq!(*h.api.deleted.lock().unwrap(), vec!["a1".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_failure_scenario() {
        let h = harness(MockApi::failing());

        let ok = h.manager.delete_attachment(AttachmentId::new("a1")).await;

        assert!(!ok);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::Error]);
        assert_eq!(h.refresher.0.get(), 0);
        assert_eq!(h.manager.deleting_id(), None);
    }

    #[tokio::test]
    async fn test_deleting_id_is_set_while_pending() {
        for succeed in [true, false] {
            let h = harness(MockApi::default());
            let release = h.api.gate("a1");
            let mut started = h.api.watch_started();

            let (ok, ()) = tokio::join!(h.manager.delete_attachment(AttachmentId::new("a1")), async {
                started.recv().await.unwrap();
                assert_eq!(h.state.snapshot().deleting_id, Some(AttachmentId::new("a1")));
                let view = h.manager.view(&syllabus());
                let PanelBody::List(rows) = view.body else {
                    panic!("expected list body");
                };
                assert!(rows[0].is_deleting);
                release.send(succeed).unwrap();
            });

            assert_eq!(ok, succeed);
            assert_eq!(h.state.snapshot().deleting_id, None);
        }
    }

    #[tokio::test]
    async fn test_dropped_delete_clears_deleting_id() {
        let h = harness(MockApi::default());
        let _release = h.api.gate("a1");

        let pending = h.manager.delete_attachment(AttachmentId::new("a1"));
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;

        assert!(timed_out.is_err());
        assert_eq!(h.manager.deleting_id(), None);
        assert!(h.notifier.kinds().is_empty());
    }

    #[tokio::test]
    async fn test_interleaved_deletes_track_latest_row_only() {
        let h = harness(MockApi::default());
        let release_a1 = h.api.gate("a1");
        let release_a2 = h.api.gate("a2");
        let mut started = h.api.watch_started();
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<&str>();

        let first = async {
            let ok = h.manager.delete_attachment(AttachmentId::new("a1")).await;
            done_tx.send("a1").unwrap();
            ok
        };
        let second = async {
            let ok = h.manager.delete_attachment(AttachmentId::new("a2")).await;
            done_tx.send("a2").unwrap();
            ok
        };
        let driver = async {
            let _ = started.recv().await.unwrap();
            let latest = started.recv().await.unwrap();
            assert_eq!(h.manager.deleting_id(), Some(latest.clone()));

            // The first delete to settle clears the shared scalar.
            let (release_first, release_last) = if latest.as_str() == "a2" {
                (release_a1, release_a2)
            } else {
                (release_a2, release_a1)
            };
            release_first.send(true).unwrap();
            done_rx.recv().await.unwrap();
            assert_eq!(h.manager.deleting_id(), None);

            release_last.send(true).unwrap();
            done_rx.recv().await.unwrap();
        };

        let (first_ok, second_ok, ()) = tokio::join!(first, second, driver);

        assert!(first_ok && second_ok);
        assert_eq!(h.refresher.0.get(), 2);
        assert_eq!(h.manager.deleting_id(), None);
    }
}
