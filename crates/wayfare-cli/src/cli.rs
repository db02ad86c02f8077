//! Command handlers over the trip store.
//!
//! Each handler parses schedule strings through the core interval module,
//! calls the store, and renders the result as markdown through the
//! terminal renderer. Validation stays in the core; this layer only
//! translates arguments and output.

use anyhow::{bail, Result};
use wayfare_core::{
    display::{CreateResult, DailySchedule, DeleteResult, Events, Trips, UpdateResult},
    interval::{self, TimeInterval},
    models::{Member, Trip},
    params::{ScheduleEvent, TripId, UpdateDescription, UpdateTitle},
    TripStore,
};

use crate::{
    args::{
        AddEventArgs, AddMemberArgs, CreateTripArgs, DeleteTripArgs, EventCommands, ListEventsArgs,
        MemberCommands, RemoveEventArgs, RemoveMemberArgs, TripCommands,
    },
    renderer::TerminalRenderer,
};

/// CLI command dispatcher owning the store and renderer.
pub struct Cli {
    store: TripStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TripStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => self.create_trip(args).await,
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => self.show_trip(args.into()).await,
            TripCommands::Delete(args) => self.delete_trip(args).await,
            TripCommands::SetTitle(args) => self.set_title(args.into()).await,
            TripCommands::SetDescribe(args) => self.set_description(args.into()).await,
            TripCommands::Days(args) => self.show_days(args.into()).await,
        }
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Add(args) => self.add_event(args).await,
            EventCommands::Remove(args) => self.remove_event(args).await,
            EventCommands::List(args) => self.list_events(args).await,
        }
    }

    pub async fn handle_member_command(&self, command: MemberCommands) -> Result<()> {
        match command {
            MemberCommands::Add(args) => self.add_member(args).await,
            MemberCommands::Remove(args) => self.remove_member(args).await,
        }
    }

    async fn create_trip(&self, args: CreateTripArgs) -> Result<()> {
        let interval = parse_interval(
            &args.start_date,
            &args.start_time,
            Some(&args.end_date),
            &args.end_time,
        )?;
        let trip: Trip = args.into_params(interval).into();
        let created = self.store.create(trip).await?;
        self.renderer.render(&CreateResult(&created).to_string())
    }

    pub async fn list_trips(&self) -> Result<()> {
        self.store.refresh().await?;
        let snapshot = self.store.snapshot();
        self.renderer.render(&Trips(&snapshot).to_string())
    }

    async fn show_trip(&self, params: TripId) -> Result<()> {
        let trip = self.fetch_trip(&params.id).await?;
        self.renderer.render(&trip.to_string())
    }

    async fn delete_trip(&self, args: DeleteTripArgs) -> Result<()> {
        if !args.confirm {
            bail!("Deleting a trip is permanent; pass --confirm to proceed");
        }
        self.store.delete(args.id.clone()).await?;
        self.renderer.render(
            &DeleteResult {
                kind: "trip",
                id: &args.id,
            }
            .to_string(),
        )
    }

    async fn set_title(&self, params: UpdateTitle) -> Result<()> {
        let updated = self.store.update_title(params.id, params.title).await?;
        self.renderer.render(&UpdateResult(&updated).to_string())
    }

    async fn set_description(&self, params: UpdateDescription) -> Result<()> {
        let updated = self
            .store
            .update_description(params.id, params.description)
            .await?;
        self.renderer.render(&UpdateResult(&updated).to_string())
    }

    async fn show_days(&self, params: TripId) -> Result<()> {
        let trip = self.fetch_trip(&params.id).await?;
        self.renderer.render(&DailySchedule(&trip).to_string())
    }

    async fn add_event(&self, args: AddEventArgs) -> Result<()> {
        let interval = parse_interval(
            &args.start_date,
            &args.start_time,
            args.end_date.as_deref(),
            &args.end_time,
        )?;
        let params = ScheduleEvent {
            trip_id: args.trip_id,
            title: args.title,
            description: args.description,
            location: None,
            interval,
        };
        let trip_id = params.trip_id.clone();
        let updated = self.store.add_event(trip_id, params.into()).await?;
        self.renderer.render(&UpdateResult(&updated).to_string())
    }

    async fn remove_event(&self, args: RemoveEventArgs) -> Result<()> {
        self.store
            .remove_event(args.trip_id, args.event_id.clone())
            .await?;
        self.renderer.render(
            &DeleteResult {
                kind: "event",
                id: &args.event_id,
            }
            .to_string(),
        )
    }

    async fn list_events(&self, args: ListEventsArgs) -> Result<()> {
        let trip = self.fetch_trip(&args.trip_id).await?;
        self.renderer.render(&Events(&trip.events).to_string())
    }

    async fn add_member(&self, args: AddMemberArgs) -> Result<()> {
        let mut member = Member::new(args.name);
        member.email = args.email;
        let updated = self.store.add_member(args.trip_id, member).await?;
        self.renderer.render(&UpdateResult(&updated).to_string())
    }

    async fn remove_member(&self, args: RemoveMemberArgs) -> Result<()> {
        self.store
            .remove_member(args.trip_id, args.member_id.clone())
            .await?;
        self.renderer.render(
            &DeleteResult {
                kind: "member",
                id: &args.member_id,
            }
            .to_string(),
        )
    }

    async fn fetch_trip(&self, id: &str) -> Result<Trip> {
        match self.store.get_by_id(id.to_string()).await? {
            Some(trip) => Ok(trip),
            None => bail!("Trip {id} not found"),
        }
    }
}

/// Builds an interval from schedule strings; a missing end date means the
/// span ends on its start day.
fn parse_interval(
    start_date: &str,
    start_time: &str,
    end_date: Option<&str>,
    end_time: &str,
) -> Result<TimeInterval> {
    let start_date = interval::parse_date(start_date)?;
    let end_date = match end_date {
        Some(raw) => interval::parse_date(raw)?,
        None => start_date,
    };
    let interval = TimeInterval::new(
        start_date,
        interval::parse_time(start_time)?,
        end_date,
        interval::parse_time(end_time)?,
    )?;
    Ok(interval)
}
