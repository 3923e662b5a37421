//! In-memory host client.
//!
//! Holds guilds, channels and the current selection, applies navigation
//! intents to them and notifies subscribers the way a real client would.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::domain::entities::{Channel, ChannelId, Guild, GuildId};
use crate::domain::errors::HostError;
use crate::domain::events::{HostEvent, HostEventKind};
use crate::domain::navigation::NavigationIntent;
use crate::domain::ports::{HostEventBus, LocationProvider, NavigationDispatcher, Subscription};

struct Subscriber {
    id: u64,
    kinds: Vec<HostEventKind>,
    sender: mpsc::UnboundedSender<HostEvent>,
}

#[derive(Default)]
struct HostState {
    guilds: HashMap<GuildId, Guild>,
    channels: HashMap<ChannelId, Channel>,
    selected_guild: Option<GuildId>,
    selected_channel: Option<ChannelId>,
    voice_channel: Option<ChannelId>,
    subscribers: Vec<Subscriber>,
    next_subscriber_id: u64,
    opened: Vec<String>,
    unavailable: bool,
}

impl HostState {
    fn check_available(&self) -> Result<(), HostError> {
        if self.unavailable {
            Err(HostError::lookup("stores not loaded"))
        } else {
            Ok(())
        }
    }
}

/// Host client kept entirely in memory.
#[derive(Clone, Default)]
pub struct InMemoryHost {
    state: Arc<RwLock<HostState>>,
    system_opener: bool,
}

impl InMemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host seeded with a few guilds and channels.
    #[must_use]
    pub fn demo() -> Self {
        use crate::domain::entities::ChannelKind;

        const RUSTACEANS: u64 = 1_001;
        const TOKIO: u64 = 1_002;
        const RATATUI: u64 = 1_003;

        let channels = [
            (2_001, RUSTACEANS, "general", ChannelKind::Text),
            (2_002, RUSTACEANS, "help", ChannelKind::Text),
            (2_003, RUSTACEANS, "Lounge", ChannelKind::Voice),
            (2_101, TOKIO, "announcements", ChannelKind::Text),
            (2_102, TOKIO, "tokio-users", ChannelKind::Text),
            (2_201, RATATUI, "showcase", ChannelKind::Text),
        ];

        channels.into_iter().fold(
            Self::new()
                .with_guild(Guild::new(RUSTACEANS, "Rustaceans"))
                .with_guild(Guild::new(TOKIO, "Tokio"))
                .with_guild(Guild::new(RATATUI, "Ratatui")),
            |host, (id, guild_id, name, kind)| {
                host.with_channel(Channel::new(id, name, kind).with_guild(guild_id))
            },
        )
    }

    #[must_use]
    pub fn with_guild(self, guild: Guild) -> Self {
        self.state.write().guilds.insert(guild.id(), guild);
        self
    }

    #[must_use]
    pub fn with_channel(self, channel: Channel) -> Self {
        self.state.write().channels.insert(channel.id(), channel);
        self
    }

    /// Opens external links in the system browser in addition to recording them.
    #[must_use]
    pub const fn with_system_opener(mut self) -> Self {
        self.system_opener = true;
        self
    }

    /// Makes every store lookup fail, as a client does while still loading.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.write().unavailable = unavailable;
    }

    /// Connects to or leaves a voice channel without notifying subscribers.
    pub fn set_voice_channel(&self, channel_id: Option<ChannelId>) {
        self.state.write().voice_channel = channel_id;
    }

    /// Changes the selection the way a user clicking around in the client would.
    pub fn select(&self, guild_id: Option<GuildId>, channel_id: Option<ChannelId>) {
        {
            let mut state = self.state.write();
            state.selected_guild = guild_id;
            state.selected_channel = channel_id;
        }
        self.publish(&HostEvent::ChannelSelect {
            guild_id,
            channel_id,
        });
    }

    /// All guilds, sorted by ID.
    #[must_use]
    pub fn guilds(&self) -> Vec<Guild> {
        let mut guilds: Vec<Guild> = self.state.read().guilds.values().cloned().collect();
        guilds.sort_by_key(Guild::id);
        guilds
    }

    /// Channels of a guild, sorted by ID.
    #[must_use]
    pub fn channels_of(&self, guild_id: GuildId) -> Vec<Channel> {
        let mut channels: Vec<Channel> = self
            .state
            .read()
            .channels
            .values()
            .filter(|channel| channel.guild_id() == Some(guild_id))
            .cloned()
            .collect();
        channels.sort_by_key(Channel::id);
        channels
    }

    /// Links handed to [`NavigationDispatcher::open_external`], oldest first.
    #[must_use]
    pub fn opened_links(&self) -> Vec<String> {
        self.state.read().opened.clone()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.read().subscribers.len()
    }

    /// Sends `event` to every interested subscriber, dropping those whose
    /// receiver is gone.
    pub fn publish(&self, event: &HostEvent) {
        let kind = event.kind();
        let mut state = self.state.write();
        state.subscribers.retain(|subscriber| {
            if !subscriber.kinds.contains(&kind) {
                return true;
            }
            subscriber.sender.send(event.clone()).is_ok()
        });
        trace!(?event, subscribers = state.subscribers.len(), "Published host event");
    }

    fn unsubscribe(state: &Weak<RwLock<HostState>>, id: u64) {
        if let Some(state) = state.upgrade() {
            state.write().subscribers.retain(|subscriber| subscriber.id != id);
            debug!(id, "Host subscription cancelled");
        }
    }
}

impl LocationProvider for InMemoryHost {
    fn current_guild_id(&self) -> Result<Option<GuildId>, HostError> {
        let state = self.state.read();
        state.check_available()?;
        Ok(state.selected_guild)
    }

    fn current_voice_channel_id(&self) -> Result<Option<ChannelId>, HostError> {
        let state = self.state.read();
        state.check_available()?;
        Ok(state.voice_channel)
    }

    fn current_channel_id(&self) -> Result<Option<ChannelId>, HostError> {
        let state = self.state.read();
        state.check_available()?;
        Ok(state.selected_channel)
    }

    fn guild(&self, id: GuildId) -> Result<Option<Guild>, HostError> {
        let state = self.state.read();
        state.check_available()?;
        Ok(state.guilds.get(&id).cloned())
    }

    fn channel(&self, id: ChannelId) -> Result<Option<Channel>, HostError> {
        let state = self.state.read();
        state.check_available()?;
        Ok(state.channels.get(&id).cloned())
    }
}

impl HostEventBus for InMemoryHost {
    fn subscribe(
        &self,
        kinds: &[HostEventKind],
        sender: mpsc::UnboundedSender<HostEvent>,
    ) -> Subscription {
        let id = {
            let mut state = self.state.write();
            let id = state.next_subscriber_id;
            state.next_subscriber_id += 1;
            state.subscribers.push(Subscriber {
                id,
                kinds: kinds.to_vec(),
                sender,
            });
            id
        };
        debug!(id, ?kinds, "Host subscription registered");

        let state = Arc::downgrade(&self.state);
        Subscription::new(move || Self::unsubscribe(&state, id))
    }
}

impl NavigationDispatcher for InMemoryHost {
    fn dispatch(&self, intent: &NavigationIntent) -> Result<(), HostError> {
        let event = match intent {
            NavigationIntent::SelectChannel {
                guild_id,
                channel_id,
            } => HostEvent::ChannelSelect {
                guild_id: Some(*guild_id),
                channel_id: Some(*channel_id),
            },
            NavigationIntent::SelectGuild { guild_id } => HostEvent::GuildSelect {
                guild_id: *guild_id,
            },
            NavigationIntent::ClearChannel => HostEvent::ChannelSelect {
                guild_id: None,
                channel_id: None,
            },
            NavigationIntent::None => return Ok(()),
            NavigationIntent::OpenExternal { url } => return self.open_external(url),
        };

        if let Some(target) = intent.target() {
            let mut state = self.state.write();
            state.selected_guild = target.guild_id();
            state.selected_channel = target.channel_id();
        }

        self.publish(&HostEvent::TransitionStart {
            path: intent_path(intent),
        });
        self.publish(&event);
        Ok(())
    }

    fn open_external(&self, url: &str) -> Result<(), HostError> {
        self.state.write().opened.push(url.to_string());

        if self.system_opener {
            info!(url, "Opening in system browser");
            opener::open_browser(url).map_err(|e| HostError::open(url, e.to_string()))?;
        }
        Ok(())
    }
}

fn intent_path(intent: &NavigationIntent) -> String {
    match intent {
        NavigationIntent::SelectChannel {
            guild_id,
            channel_id,
        } => format!("/channels/{guild_id}/{channel_id}"),
        NavigationIntent::SelectGuild { guild_id } => format!("/channels/{guild_id}"),
        NavigationIntent::ClearChannel => "/channels/@me".to_string(),
        NavigationIntent::None | NavigationIntent::OpenExternal { .. } => String::new(),
    }
}
