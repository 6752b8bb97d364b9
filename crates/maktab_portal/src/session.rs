//! crates/maktab_portal/src/session.rs
//!
//! The per-role session store: login/logout/restore lifecycle around a
//! working copy of the role's domain state, with snapshot publication for
//! subscribed views. One store instance exists per portal; the three realms
//! share nothing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use maktab_core::domain::{AdminProfile, InstructorProfile, Realm, StudentProfile};
use maktab_core::error::{AuthError, DomainError};
use maktab_core::fixture;
use maktab_core::ports::{CredentialService, FlagStore};
use maktab_core::{AdminState, InstructorState, StudentState};

use crate::error::PortalError;

//=========================================================================================
// Portal Markers
//=========================================================================================

/// Ties a realm to its flag key, its fixture seed and its profile type.
/// Implemented by zero-sized markers, one per portal.
pub trait Portal: Send + Sync + 'static {
    const REALM: Realm;
    /// The persisted key for this realm's session flag. Keys are distinct
    /// per realm; presence of the key is the only signal checked.
    const FLAG_KEY: &'static str;
    type State: Clone + Send + Sync + 'static;
    type Profile: Clone + Serialize + Send + Sync + 'static;

    fn seed() -> Self::State;
    fn profile(state: &Self::State) -> Self::Profile;
}

pub struct AdminPortal;

impl Portal for AdminPortal {
    const REALM: Realm = Realm::Admin;
    const FLAG_KEY: &'static str = "maktab_admin_auth";
    type State = AdminState;
    type Profile = AdminProfile;

    fn seed() -> AdminState {
        fixture::admin_fixture()
    }

    fn profile(state: &AdminState) -> AdminProfile {
        state.profile.clone()
    }
}

pub struct InstructorPortal;

impl Portal for InstructorPortal {
    const REALM: Realm = Realm::Instructor;
    const FLAG_KEY: &'static str = "maktab_instructor_auth";
    type State = InstructorState;
    type Profile = InstructorProfile;

    fn seed() -> InstructorState {
        fixture::instructor_fixture()
    }

    fn profile(state: &InstructorState) -> InstructorProfile {
        state.profile.clone()
    }
}

pub struct StudentPortal;

impl Portal for StudentPortal {
    const REALM: Realm = Realm::Student;
    const FLAG_KEY: &'static str = "maktab_student_auth";
    type State = StudentState;
    type Profile = StudentProfile;

    fn seed() -> StudentState {
        fixture::student_fixture()
    }

    fn profile(state: &StudentState) -> StudentProfile {
        state.profile.clone()
    }
}

pub type AdminStore = SessionStore<AdminPortal>;
pub type InstructorStore = SessionStore<InstructorPortal>;
pub type StudentStore = SessionStore<StudentPortal>;

//=========================================================================================
// Sessions and Snapshots
//=========================================================================================

/// An established login session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub realm: Realm,
    pub started_at: DateTime<Utc>,
}

/// The read-only view of the store that consumers subscribe to:
/// `{authenticated, profile-or-null, loading}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<P> {
    pub authenticated: bool,
    pub profile: Option<P>,
    pub loading: bool,
}

impl<P> Snapshot<P> {
    fn signed_out() -> Self {
        Self {
            authenticated: false,
            profile: None,
            loading: false,
        }
    }

    fn loading() -> Self {
        Self {
            authenticated: false,
            profile: None,
            loading: true,
        }
    }
}

//=========================================================================================
// The Session Store
//=========================================================================================

/// Holds one realm's session lifecycle and working copy. Constructed with
/// its collaborators injected; there is no ambient singleton. Lifecycle:
/// `Unauthenticated -> login -> Authenticated -> logout -> Unauthenticated`,
/// with `login` on an authenticated store being a no-op that returns the
/// current session.
pub struct SessionStore<P: Portal> {
    flags: Arc<dyn FlagStore>,
    directory: Arc<dyn CredentialService>,
    state: Option<P::State>,
    session: Option<Session>,
    snapshot_tx: watch::Sender<Snapshot<P::Profile>>,
}

impl<P: Portal> SessionStore<P> {
    pub fn new(flags: Arc<dyn FlagStore>, directory: Arc<dyn CredentialService>) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::signed_out());
        Self {
            flags,
            directory,
            state: None,
            session: None,
            snapshot_tx,
        }
    }

    /// Subscribes to snapshot changes. Views hold the receiver and re-render
    /// whenever it reports a change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<P::Profile>> {
        self.snapshot_tx.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The working copy, readable while a session is established.
    pub fn state(&self) -> Option<&P::State> {
        self.state.as_ref()
    }

    /// Checks the identifier/secret pair against the credential port and, on
    /// success, persists the session flag and seeds the working copy from
    /// the fixture. The store publishes a loading snapshot for the duration
    /// of the (artificially delayed) credential check.
    pub async fn login(&mut self, identifier: &str, secret: &str) -> Result<Session, PortalError> {
        if let Some(session) = &self.session {
            return Ok(session.clone());
        }

        self.publish(Snapshot::loading());
        let verdict = match self.directory.verify(P::REALM, identifier, secret).await {
            Ok(verdict) => verdict,
            Err(err) => {
                self.publish_current();
                return Err(err.into());
            }
        };
        if !verdict {
            warn!(realm = P::REALM.as_str(), identifier, "login rejected");
            self.publish_current();
            return Err(AuthError::InvalidCredentials.into());
        }
        if let Err(err) = self.flags.set(P::FLAG_KEY).await {
            self.publish_current();
            return Err(err.into());
        }

        let session = self.establish();
        info!(realm = P::REALM.as_str(), session_id = %session.id, "login succeeded");
        Ok(session)
    }

    /// Clears the session flag, working copy and session. Idempotent: a
    /// second call observes the same unauthenticated state as the first.
    pub async fn logout(&mut self) -> Result<(), PortalError> {
        self.flags.clear(P::FLAG_KEY).await?;
        if let Some(session) = self.session.take() {
            info!(realm = P::REALM.as_str(), session_id = %session.id, "logged out");
        }
        self.state = None;
        self.publish_current();
        Ok(())
    }

    /// Re-establishes a session at process start when the persisted flag is
    /// present. The working copy is re-seeded from the fixture: the flag is
    /// the only thing persisted, so edits made in a previous session are not
    /// restored. Known limitation of the flag-only persistence layout.
    pub async fn restore_session(&mut self) -> Result<Option<Session>, PortalError> {
        if self.session.is_some() {
            return Ok(self.session.clone());
        }
        if !self.flags.get(P::FLAG_KEY).await? {
            return Ok(None);
        }

        let session = self.establish();
        info!(realm = P::REALM.as_str(), session_id = %session.id, "session restored");
        Ok(Some(session))
    }

    /// Runs a mutation against the working copy and republishes the snapshot
    /// so subscribers re-render. Fails with `NotAuthenticated` when no
    /// session is established.
    pub fn update<T>(
        &mut self,
        mutate: impl FnOnce(&mut P::State) -> Result<T, DomainError>,
    ) -> Result<T, PortalError> {
        let state = self.state.as_mut().ok_or(PortalError::NotAuthenticated)?;
        let out = mutate(state)?;
        self.publish_current();
        Ok(out)
    }

    fn establish(&mut self) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            realm: P::REALM,
            started_at: Utc::now(),
        };
        self.state = Some(P::seed());
        self.session = Some(session.clone());
        self.publish_current();
        session
    }

    fn publish_current(&self) {
        let snapshot = match &self.state {
            Some(state) => Snapshot {
                authenticated: true,
                profile: Some(P::profile(state)),
                loading: false,
            },
            None => Snapshot::signed_out(),
        };
        self.publish(snapshot);
    }

    fn publish(&self, snapshot: Snapshot<P::Profile>) {
        // send_replace delivers even when no view is subscribed yet.
        self.snapshot_tx.send_replace(snapshot);
    }
}
