use chrono::{
    format::{Item, StrftimeItems},
    Local, NaiveDate, Weekday,
};

use crate::booking::{
    model::shift_date, Booking, BookingId, RenderableEvent, RoomFilter, SelectedRange,
    DEFAULT_ID_LENGTH,
};
use crate::form::{BookingForm, FormError, FormField};
use crate::gesture::{GestureHandler, RenderFeed};
use crate::i18n::Locale;
use crate::storage::config::{Config, RoomColors};
use crate::store::{EventStore, StoreError};
use crate::ui::theme::Theme;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Visual,
    Move,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewType {
    Month,
    Week,
    Day,
}

impl ViewType {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "week" => ViewType::Week,
            "day" => ViewType::Day,
            _ => ViewType::Month,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Ready,
    Notice(String),
    Error(String),
}

/// A booking picked up for dragging, with the dates it would land on and
/// the cursor date it was picked up from.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveState {
    pub booking_id: BookingId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub origin: NaiveDate,
}

pub struct AppState {
    pub mode: Mode,
    pub view: ViewType,
    pub selected_date: NaiveDate,
    pub first_day_of_week: Weekday,
    pub date_format: String,
    pub store: EventStore,
    pub form: BookingForm,
    pub selected_booking_index: usize,
    pub visual_selection_start: Option<NaiveDate>,
    pub move_state: Option<MoveState>,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub locale: Locale,
    pub status: StatusLine,
    pub id_length: usize,
    pub room_colors: RoomColors,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            view: ViewType::Month,
            selected_date: Local::now().date_naive(),
            first_day_of_week: Weekday::Mon,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            store: EventStore::new(),
            form: BookingForm::default(),
            selected_booking_index: 0,
            visual_selection_start: None,
            move_state: None,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            locale: Locale::default(),
            status: StatusLine::Ready,
            id_length: DEFAULT_ID_LENGTH,
            room_colors: RoomColors::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut app = Self::new().with_theme(Theme::get_by_name(&config.ui.theme));
        app.view = ViewType::from_name(&config.ui.default_view);
        app.first_day_of_week = match config.ui.first_day_of_week.to_lowercase().as_str() {
            "sunday" | "sun" => Weekday::Sun,
            "saturday" | "sat" => Weekday::Sat,
            _ => Weekday::Mon,
        };
        if StrftimeItems::new(&config.ui.date_format).any(|item| item == Item::Error) {
            tracing::warn!("Invalid date_format {:?}; using {}", config.ui.date_format, DEFAULT_DATE_FORMAT);
        } else {
            app.date_format = config.ui.date_format.clone();
        }
        app.locale = config.ui.locale.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to English", e);
            Locale::English
        });
        app.form.set_policy(config.validation);
        app.id_length = config.bookings.id_length;
        app.room_colors = config.bookings.default_color.clone();
        app
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    pub fn bookings_for_date(&self, date: NaiveDate) -> Vec<&Booking> {
        self.store.visible_on(date)
    }

    pub fn get_selected_booking(&self) -> Option<&Booking> {
        let bookings = self.bookings_for_date(self.selected_date);
        bookings.get(self.selected_booking_index).copied()
    }

    pub fn move_booking_selection_down(&mut self) {
        let count = self.bookings_for_date(self.selected_date).len();
        if count > 0 && self.selected_booking_index < count - 1 {
            self.selected_booking_index += 1;
        }
    }

    pub fn move_booking_selection_up(&mut self) {
        if self.selected_booking_index > 0 {
            self.selected_booking_index -= 1;
        }
    }

    pub fn reset_booking_selection(&mut self) {
        self.selected_booking_index = 0;
    }

    pub fn color_for(&self, booking: &Booking) -> String {
        booking
            .color
            .clone()
            .unwrap_or_else(|| self.room_colors.for_room(booking.room).to_string())
    }

    pub fn get_visual_selection_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.visual_selection_start.map(|start| {
            let end = self.selected_date;
            if start <= end {
                (start, end)
            } else {
                (end, start)
            }
        })
    }

    pub fn is_date_in_visual_selection(&self, date: NaiveDate) -> bool {
        if let Some((start, end)) = self.get_visual_selection_range() {
            date >= start && date <= end
        } else {
            false
        }
    }

    /// Picks up the selected booking. Returns false when nothing is selected.
    pub fn begin_move(&mut self) -> bool {
        let Some(booking) = self.get_selected_booking() else {
            return false;
        };
        self.move_state = Some(MoveState {
            booking_id: booking.id.clone(),
            start: booking.start,
            end: booking.end,
            origin: self.selected_date,
        });
        self.mode = Mode::Move;
        true
    }

    /// Shifts the held booking and the cursor together.
    pub fn shift_move(&mut self, days: i64) {
        let Some(state) = self.move_state.as_mut() else {
            return;
        };
        let (Some(start), Some(end), Some(cursor)) = (
            shift_date(state.start, days),
            shift_date(state.end, days),
            shift_date(self.selected_date, days),
        ) else {
            return;
        };
        state.start = start;
        state.end = end;
        self.selected_date = cursor;
    }

    pub fn drop_move(&mut self) -> Result<(), StoreError> {
        let Some(state) = self.move_state.take() else {
            self.mode = Mode::Normal;
            return Ok(());
        };
        self.mode = Mode::Normal;
        self.on_event_dragged(&state.booking_id, state.start, state.end)
    }

    pub fn abort_move(&mut self) {
        if let Some(state) = self.move_state.take() {
            self.selected_date = state.origin;
        }
        self.mode = Mode::Normal;
    }

    pub fn is_date_in_move_preview(&self, date: NaiveDate) -> bool {
        self.move_state
            .as_ref()
            .is_some_and(|m| m.start <= date && date <= m.end.max(m.start))
    }

    pub fn begin_booking_on_selected_date(&mut self) {
        self.on_date_selected(SelectedRange::single_day(self.selected_date));
    }

    /// Types into the active text field. The room field is changed with
    /// [`AppState::cycle_room`] instead.
    pub fn edit_active_field(&mut self, edit: impl FnOnce(&mut String)) {
        let field = self.form.active_field();
        if field == FormField::Room {
            return;
        }
        let Some(mut value) = self.form.field_value(field) else {
            return;
        };
        edit(&mut value);
        if let Err(e) = self.form.set_field(field, &value) {
            self.report_form_error(&e);
        }
    }

    pub fn cycle_room(&mut self, forward: bool) {
        let Some(draft) = self.form.draft() else {
            return;
        };
        let room = if forward { draft.room.next() } else { draft.room.prev() };
        if let Err(e) = self.form.set_field(FormField::Room, room.as_str()) {
            self.report_form_error(&e);
        }
    }

    fn report_form_error(&mut self, error: &FormError) {
        tracing::warn!("Booking form: {}", error);
        self.status = StatusLine::Error(error.to_string());
    }
}

impl GestureHandler for AppState {
    fn on_date_selected(&mut self, range: SelectedRange) {
        tracing::info!("Date selected: {} to {}", range.start, range.end);
        self.form.begin(range);
        self.visual_selection_start = None;
        self.mode = Mode::Insert;
        self.status = StatusLine::Ready;
    }

    fn on_event_dragged(
        &mut self,
        id: &BookingId,
        new_start: NaiveDate,
        new_end: NaiveDate,
    ) -> Result<(), StoreError> {
        match self.store.reschedule(id, new_start, new_end) {
            Ok(()) => {
                tracing::info!("Booking {} moved to {}..{}", id, new_start, new_end);
                self.status = StatusLine::Notice(self.locale.labels().booking_moved.to_string());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Drag ignored: {}", e);
                self.status = StatusLine::Error(self.locale.labels().booking_not_found.to_string());
                Err(e)
            }
        }
    }

    fn on_filter_changed(&mut self, filter: RoomFilter) {
        tracing::info!("Room filter changed to {:?}", filter);
        self.store.set_room_filter(filter);
        self.reset_booking_selection();
    }

    fn on_field_edited(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field: FormField = name.parse()?;
        self.form.set_field(field, value)
    }

    fn on_form_submitted(&mut self) -> Result<BookingId, FormError> {
        let id = BookingId::generate(self.id_length);
        match self.form.commit(&mut self.store, id) {
            Ok(id) => {
                self.mode = Mode::Normal;
                self.status = StatusLine::Notice(self.locale.labels().booking_created.to_string());
                Ok(id)
            }
            Err(e) => {
                self.report_form_error(&e);
                if e == FormError::NoOpenDraft {
                    self.mode = Mode::Normal;
                }
                Err(e)
            }
        }
    }

    fn on_form_cancelled(&mut self) -> Result<(), FormError> {
        self.mode = Mode::Normal;
        if let Err(e) = self.form.cancel() {
            self.report_form_error(&e);
            return Err(e);
        }
        self.status = StatusLine::Notice(self.locale.labels().form_cancelled.to_string());
        Ok(())
    }
}

impl RenderFeed for AppState {
    fn render_events(&self) -> Vec<RenderableEvent> {
        self.store
            .render_events()
            .into_iter()
            .map(|mut event| {
                if event.color.is_none() {
                    event.color = Some(self.room_colors.for_room(event.room_type).to_string());
                }
                event
            })
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
