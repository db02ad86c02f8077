use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use wayfare_core::params::{CreateTrip, TripId, UpdateDescription, UpdateTitle};

/// Command-line interface for the Wayfare trip planner
///
/// Wayfare organizes trips with their scheduled events and members. Every
/// command prints markdown; schedules are validated so events stay within
/// their trip and never overlap each other.
#[derive(Parser)]
#[command(version, about, name = "wayfare")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfare/wayfare.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User to attribute new trips to
    #[arg(long, global = true, default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage events within a trip
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Manage trip members
    #[command(alias = "m")]
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },
}

/// Create a new trip
#[derive(ClapArgs)]
pub struct CreateTripArgs {
    /// Title of the trip
    pub title: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,
    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: String,
    /// Start of day on the first day (HH:MM:SS)
    #[arg(long, default_value = "00:00:00")]
    pub start_time: String,
    /// End of day on the last day (HH:MM:SS)
    #[arg(long, default_value = "23:59:59")]
    pub end_time: String,
    /// Optional description providing more context about the trip
    #[arg(short, long)]
    pub description: Option<String>,
    /// Destination, free form ("Toronto to Ottawa")
    #[arg(short, long)]
    pub location: Option<String>,
}

impl CreateTripArgs {
    /// Converts to core parameters once the schedule strings have been
    /// parsed into an interval.
    pub fn into_params(self, interval: wayfare_core::TimeInterval) -> CreateTrip {
        CreateTrip {
            title: self.title,
            description: self.description,
            location: self.location,
            interval,
        }
    }
}

/// Show details of a specific trip
#[derive(ClapArgs)]
pub struct ShowTripArgs {
    /// ID of the trip to display
    pub id: String,
}

impl From<ShowTripArgs> for TripId {
    fn from(val: ShowTripArgs) -> Self {
        TripId { id: val.id }
    }
}

/// Delete a trip permanently
#[derive(ClapArgs)]
pub struct DeleteTripArgs {
    /// ID of the trip to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Rename a trip
#[derive(ClapArgs)]
pub struct SetTitleArgs {
    /// ID of the trip to rename
    pub id: String,
    /// New title
    pub title: String,
}

impl From<SetTitleArgs> for UpdateTitle {
    fn from(val: SetTitleArgs) -> Self {
        UpdateTitle {
            id: val.id,
            title: val.title,
        }
    }
}

/// Replace a trip's description
#[derive(ClapArgs)]
pub struct SetDescribeArgs {
    /// ID of the trip to update
    pub id: String,
    /// New description; omit to clear the current one
    pub description: Option<String>,
}

impl From<SetDescribeArgs> for UpdateDescription {
    fn from(val: SetDescribeArgs) -> Self {
        UpdateDescription {
            id: val.id,
            description: val.description,
        }
    }
}

/// Show a trip's schedule day by day
#[derive(ClapArgs)]
pub struct DaysArgs {
    /// ID of the trip to lay out
    pub id: String,
}

impl From<DaysArgs> for TripId {
    fn from(val: DaysArgs) -> Self {
        TripId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List all trips
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific trip
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Delete a trip permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTripArgs),
    /// Rename a trip
    SetTitle(SetTitleArgs),
    /// Replace a trip's description
    SetDescribe(SetDescribeArgs),
    /// Show the schedule day by day
    Days(DaysArgs),
}

/// Schedule an event inside a trip
#[derive(ClapArgs)]
pub struct AddEventArgs {
    /// ID of the trip to schedule into
    pub trip_id: String,
    /// Title of the event
    pub title: String,
    /// Day the event starts (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,
    /// Time the event starts (HH:MM:SS)
    #[arg(long)]
    pub start_time: String,
    /// Day the event ends (YYYY-MM-DD); defaults to the start day
    #[arg(long)]
    pub end_date: Option<String>,
    /// Time the event ends (HH:MM:SS)
    #[arg(long)]
    pub end_time: String,
    /// Optional detailed description of the event
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Remove an event from a trip
#[derive(ClapArgs)]
pub struct RemoveEventArgs {
    /// ID of the trip the event belongs to
    pub trip_id: String,
    /// ID of the event to remove
    pub event_id: String,
}

/// List the events scheduled in a trip
#[derive(ClapArgs)]
pub struct ListEventsArgs {
    /// ID of the trip to list events for
    pub trip_id: String,
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Schedule an event inside a trip
    #[command(alias = "a")]
    Add(AddEventArgs),
    /// Remove an event from a trip
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveEventArgs),
    /// List the events scheduled in a trip
    #[command(aliases = ["l", "ls"])]
    List(ListEventsArgs),
}

/// Add a member to a trip
#[derive(ClapArgs)]
pub struct AddMemberArgs {
    /// ID of the trip to add the member to
    pub trip_id: String,
    /// Display name of the member
    pub name: String,
    /// Contact email
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Remove a member from a trip
#[derive(ClapArgs)]
pub struct RemoveMemberArgs {
    /// ID of the trip the member belongs to
    pub trip_id: String,
    /// ID of the member to remove
    pub member_id: String,
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to a trip
    #[command(alias = "a")]
    Add(AddMemberArgs),
    /// Remove a member from a trip
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveMemberArgs),
}
