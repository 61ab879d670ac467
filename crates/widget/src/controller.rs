//! Widget controller: the state machine behind one widget.
//!
//! The controller owns a container, a configuration and a [`WidgetState`].
//! Messages move it between the three views:
//!
//! | Current | Message | Action | Next |
//! |---------|---------|--------|------|
//! | categories | `SelectCategory` | fetch articles of the category | articles |
//! | articles | `SelectArticle` | fetch the article | article |
//! | articles | `Back` | clear articles and category | categories |
//! | article | `Back` | clear the article | articles |
//! | any | `Toggle` | flip the open flag | unchanged |
//!
//! Any other combination is ignored.
//!
//! # Fetches
//!
//! A fetch-triggering message renders the loading placeholder and returns a
//! [`FetchJob`]. The job runs against a [`WidgetApi`] and its
//! [`FetchOutcome`] is handed back to [`WidgetController::complete`], which
//! either applies it and renders the new view, or renders the error for that
//! fetch and leaves the state alone.
//!
//! Each job carries a ticket with the navigation generation it was issued
//! against. Issuing a fetch or going back advances the generation, so when
//! two fetches overlap only the one issued last is applied, whatever order
//! they resolve in.

use std::sync::Arc;

use kbw_client::WidgetApi;
use kbw_protocol::{Article, KnowledgeBase, Message, WidgetConfig};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, instrument, warn};

use crate::container::Container;
use crate::dom::Element;
use crate::error::Result;
use crate::event::{HostEvent, event_to_message};
use crate::state::{View, WidgetState};
use crate::views;

/// The navigation generation a fetch was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// What a fetch asks the API for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    KnowledgeBase { id: String },
    Articles { category_id: String },
    Article { id: String },
}

impl FetchRequest {
    /// Returns the message shown in the widget body when the fetch fails.
    #[must_use]
    pub const fn error_message(&self) -> &'static str {
        match self {
            Self::KnowledgeBase { .. } => "Failed to load knowledge base",
            Self::Articles { .. } => "Failed to load articles",
            Self::Article { .. } => "Failed to load article",
        }
    }
}

/// Data returned by a successful fetch.
#[derive(Debug, Clone)]
pub enum Fetched {
    KnowledgeBase(KnowledgeBase),
    Articles {
        category_id: String,
        articles: Vec<Article>,
    },
    Article(Article),
}

/// A fetch issued by the controller, not yet executed.
#[derive(Debug, Clone)]
#[must_use = "a fetch job does nothing until executed and completed"]
pub struct FetchJob {
    ticket: Ticket,
    request: FetchRequest,
}

impl FetchJob {
    /// Returns what the job fetches.
    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    /// Runs the request against `api`.
    pub async fn execute(self, api: &dyn WidgetApi) -> FetchOutcome {
        let result = match &self.request {
            FetchRequest::KnowledgeBase { id } => api
                .fetch_knowledge_base(id)
                .await
                .map(Fetched::KnowledgeBase),
            FetchRequest::Articles { category_id } => {
                api.fetch_articles(category_id)
                    .await
                    .map(|articles| Fetched::Articles {
                        category_id: category_id.clone(),
                        articles,
                    })
            }
            FetchRequest::Article { id } => api.fetch_article(id).await.map(Fetched::Article),
        };

        FetchOutcome {
            ticket: self.ticket,
            request: self.request,
            result,
        }
    }
}

/// The result of an executed [`FetchJob`].
#[derive(Debug)]
pub struct FetchOutcome {
    ticket: Ticket,
    request: FetchRequest,
    result: kbw_client::Result<Fetched>,
}

impl FetchOutcome {
    /// Returns what was fetched.
    #[must_use]
    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    /// Returns `true` if the fetch succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Controller of one mounted widget.
#[derive(Debug)]
pub struct WidgetController<C> {
    config: WidgetConfig,
    state: WidgetState,
    container: C,
}

impl<C: Container> WidgetController<C> {
    /// Creates a controller with an explicit configuration.
    pub fn new(config: WidgetConfig, container: C) -> Self {
        Self {
            config,
            state: WidgetState::new(),
            container,
        }
    }

    /// Creates a controller configured from the container's attributes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WidgetError::Config`] if the container has no
    /// `data-knowledge-base` attribute.
    pub fn from_container(container: C, origin: &str) -> Result<Self> {
        let config = WidgetConfig::from_attributes(origin, |name| container.attribute(name))?;
        Ok(Self::new(config, container))
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Consumes the controller and returns its container.
    pub fn into_container(self) -> C {
        self.container
    }

    /// Renders the loading placeholder and issues the knowledge base fetch.
    pub fn start(&mut self) -> FetchJob {
        let request = FetchRequest::KnowledgeBase {
            id: self.config.knowledge_base_id.clone(),
        };
        self.issue(request)
    }

    /// Applies a message.
    ///
    /// Returns the fetch to run when the message triggers one.
    #[instrument(skip(self), fields(kb = %self.config.knowledge_base_id))]
    pub fn handle(&mut self, message: Message) -> Option<FetchJob> {
        match message {
            Message::Toggle => {
                self.state.toggle_open();
                self.render();
                None
            }
            Message::Back => {
                if self.state.back() {
                    self.render();
                } else {
                    debug!("back ignored at categories view");
                }
                None
            }
            Message::SelectCategory { id } if self.state.view == View::Categories => {
                Some(self.issue(FetchRequest::Articles { category_id: id }))
            }
            Message::SelectArticle { id } if self.state.view == View::Articles => {
                Some(self.issue(FetchRequest::Article { id }))
            }
            Message::SelectCategory { .. } | Message::SelectArticle { .. } => {
                debug!(view = ?self.state.view, "selection ignored in this view");
                None
            }
            Message::DragStart { x, y } => {
                self.state.begin_drag(x, y);
                self.container
                    .set_style("cursor", Some("grabbing".to_string()));
                None
            }
            Message::DragMove { x, y } => {
                if self.state.drag_to(x, y) {
                    self.apply_position();
                }
                None
            }
            Message::DragEnd => {
                if self.state.end_drag() {
                    self.container.set_style("cursor", None);
                }
                None
            }
        }
    }

    /// Applies the outcome of a fetch.
    ///
    /// Returns `false` if the outcome is stale and was not rendered. A stale
    /// knowledge base is still kept, so the categories view has content once
    /// the user navigates back to it.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.ticket.generation != self.state.generation() {
            if let Ok(Fetched::KnowledgeBase(knowledge_base)) = outcome.result {
                debug!(
                    issued = outcome.ticket.generation,
                    current = self.state.generation(),
                    "storing knowledge base behind newer navigation"
                );
                self.state.set_knowledge_base(knowledge_base);
                return false;
            }
            debug!(
                request = ?outcome.request,
                issued = outcome.ticket.generation,
                current = self.state.generation(),
                "discarding stale fetch result"
            );
            return false;
        }

        match outcome.result {
            Ok(Fetched::KnowledgeBase(knowledge_base)) => {
                self.state.set_knowledge_base(knowledge_base);
            }
            Ok(Fetched::Articles {
                category_id,
                articles,
            }) => self.state.show_articles(category_id, articles),
            Ok(Fetched::Article(article)) => self.state.show_article(article),
            Err(error) => {
                warn!(
                    kb = %self.config.knowledge_base_id,
                    request = ?outcome.request,
                    %error,
                    "fetch failed"
                );
                self.replace(views::render_error(outcome.request.error_message()));
                return true;
            }
        }

        self.render();
        true
    }

    /// Starts the widget and waits for the knowledge base.
    pub async fn load(&mut self, api: &dyn WidgetApi) {
        let job = self.start();
        let outcome = job.execute(api).await;
        self.complete(outcome);
    }

    /// Applies a message and, if it triggers a fetch, runs it to completion.
    pub async fn dispatch(&mut self, message: Message, api: &dyn WidgetApi) {
        if let Some(job) = self.handle(message) {
            let outcome = job.execute(api).await;
            self.complete(outcome);
        }
    }

    /// Runs the widget until `events` is closed.
    ///
    /// Host events are handled as they arrive while fetches run
    /// concurrently. When the channel closes, pending fetches are awaited
    /// and applied before the controller is returned.
    #[instrument(skip_all, fields(kb = %self.config.knowledge_base_id))]
    pub async fn run(
        mut self,
        api: Arc<dyn WidgetApi>,
        mut events: mpsc::Receiver<HostEvent>,
    ) -> Self {
        let mut pending = JoinSet::new();
        let job = self.start();
        spawn_fetch(&mut pending, &api, job);

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    if let Some(job) = event_to_message(&event).and_then(|m| self.handle(m)) {
                        spawn_fetch(&mut pending, &api, job);
                    }
                }
                Some(joined) = pending.join_next(), if !pending.is_empty() => {
                    self.apply_joined(joined);
                }
            }
        }

        while let Some(joined) = pending.join_next().await {
            self.apply_joined(joined);
        }
        self
    }

    fn apply_joined(&mut self, joined: std::result::Result<FetchOutcome, JoinError>) {
        match joined {
            Ok(outcome) => {
                self.complete(outcome);
            }
            Err(error) => warn!(%error, "fetch task failed"),
        }
    }

    fn issue(&mut self, request: FetchRequest) -> FetchJob {
        let ticket = Ticket {
            generation: self.state.next_generation(),
        };
        debug!(?request, generation = ticket.generation, "issuing fetch");
        self.replace(views::render_loading());
        FetchJob { ticket, request }
    }

    fn render(&mut self) {
        let tree = views::render_widget(&self.config, &self.state);
        self.replace(tree);
    }

    fn replace(&mut self, tree: Element) {
        self.container.set_inner_html(tree.to_html());
        self.apply_position();
    }

    fn apply_position(&mut self) {
        self.container
            .set_style("transform", Some(self.state.position.transform()));
    }
}

fn spawn_fetch(
    pending: &mut JoinSet<FetchOutcome>,
    api: &Arc<dyn WidgetApi>,
    job: FetchJob,
) {
    let api = Arc::clone(api);
    pending.spawn(async move { job.execute(api.as_ref()).await });
}
