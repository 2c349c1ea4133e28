use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use crate::app::Mode;
use crate::booking::{RoomFilter, RoomType};
use crate::form::FormField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale: {0}")]
pub struct ParseLocaleError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

/// Every user-facing string the terminal host draws.
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub month_view: &'static str,
    pub week_view: &'static str,
    pub day_view: &'static str,
    pub new_booking: &'static str,
    pub user_name: &'static str,
    pub room: &'static str,
    pub color: &'static str,
    pub participants: &'static str,
    pub comment: &'static str,
    pub dates: &'static str,
    pub all_rooms: &'static str,
    pub unassigned: &'static str,
    pub meeting: &'static str,
    pub conference: &'static str,
    pub event: &'static str,
    pub filter: &'static str,
    pub bookings_on: &'static str,
    pub no_bookings: &'static str,
    pub all_day: &'static str,
    pub days_suffix: &'static str,
    pub form_hint: &'static str,
    pub month_hint: &'static str,
    pub list_hint: &'static str,
    pub visual_hint: &'static str,
    pub move_hint: &'static str,
    pub ready: &'static str,
    pub mode_normal: &'static str,
    pub mode_insert: &'static str,
    pub mode_visual: &'static str,
    pub mode_move: &'static str,
    pub mode_command: &'static str,
    pub booking_created: &'static str,
    pub booking_moved: &'static str,
    pub booking_not_found: &'static str,
    pub form_cancelled: &'static str,
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
}

static ENGLISH: Labels = Labels {
    app_title: "Room Booking",
    month_view: "Month",
    week_view: "Week",
    day_view: "Day",
    new_booking: "New Booking",
    user_name: "Name",
    room: "Room",
    color: "Color",
    participants: "Other users",
    comment: "Comment",
    dates: "Dates",
    all_rooms: "All",
    unassigned: "No room",
    meeting: "Meeting room",
    conference: "Conference room",
    event: "Event hall",
    filter: "Filter",
    bookings_on: "Bookings on",
    no_bookings: "No bookings",
    all_day: "All day",
    days_suffix: "days",
    form_hint: "Tab = Next field | ←/→ = Room | Enter = Save | Esc = Cancel",
    month_hint: "hjkl = Navigate | a = Book | v = Range | f = Filter | m/w/d = Views",
    list_hint: "J/K = Select | M = Move",
    visual_hint: "Enter = Book range | Esc = Cancel",
    move_hint: "hjkl = Shift | Enter = Drop | Esc = Abort",
    ready: "Ready",
    mode_normal: "Normal",
    mode_insert: "Insert",
    mode_visual: "Visual",
    mode_move: "Move",
    mode_command: "Command",
    booking_created: "Booking created",
    booking_moved: "Booking moved",
    booking_not_found: "Booking no longer exists",
    form_cancelled: "Booking discarded",
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
};

static SPANISH: Labels = Labels {
    app_title: "Reserva de salas",
    month_view: "Mes",
    week_view: "Semana",
    day_view: "Día",
    new_booking: "Nueva reserva",
    user_name: "Nombre",
    room: "Sala",
    color: "Color",
    participants: "Otros usuarios",
    comment: "Comentario",
    dates: "Fechas",
    all_rooms: "Todas",
    unassigned: "Sin sala",
    meeting: "Sala de reuniones",
    conference: "Sala de conferencias",
    event: "Salón de eventos",
    filter: "Filtro",
    bookings_on: "Reservas del",
    no_bookings: "Sin reservas",
    all_day: "Todo el día",
    days_suffix: "días",
    form_hint: "Tab = Siguiente | ←/→ = Sala | Enter = Guardar | Esc = Cancelar",
    month_hint: "hjkl = Navegar | a = Reservar | v = Rango | f = Filtro | m/w/d = Vistas",
    list_hint: "J/K = Elegir | M = Mover",
    visual_hint: "Enter = Reservar rango | Esc = Cancelar",
    move_hint: "hjkl = Desplazar | Enter = Soltar | Esc = Abortar",
    ready: "Listo",
    mode_normal: "Normal",
    mode_insert: "Edición",
    mode_visual: "Selección",
    mode_move: "Mover",
    mode_command: "Comando",
    booking_created: "Reserva creada",
    booking_moved: "Reserva movida",
    booking_not_found: "La reserva ya no existe",
    form_cancelled: "Reserva descartada",
    weekdays: ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"],
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Spanish => &SPANISH,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    pub fn room_label(self, room: RoomType) -> &'static str {
        let labels = self.labels();
        match room {
            RoomType::Unassigned => labels.unassigned,
            RoomType::Meeting => labels.meeting,
            RoomType::Conference => labels.conference,
            RoomType::Event => labels.event,
        }
    }

    pub fn filter_label(self, filter: RoomFilter) -> &'static str {
        match filter {
            RoomFilter::All => self.labels().all_rooms,
            RoomFilter::Only(room) => self.room_label(room),
        }
    }

    pub fn field_label(self, field: FormField) -> &'static str {
        let labels = self.labels();
        match field {
            FormField::UserName => labels.user_name,
            FormField::Room => labels.room,
            FormField::Color => labels.color,
            FormField::Participants => labels.participants,
            FormField::Comment => labels.comment,
        }
    }

    pub fn mode_label(self, mode: &Mode) -> &'static str {
        let labels = self.labels();
        match mode {
            Mode::Normal => labels.mode_normal,
            Mode::Insert => labels.mode_insert,
            Mode::Visual => labels.mode_visual,
            Mode::Move => labels.mode_move,
            Mode::Command => labels.mode_command,
        }
    }

    pub fn weekday_label(self, weekday: Weekday) -> &'static str {
        self.labels().weekdays[weekday.num_days_from_monday() as usize]
    }

    pub fn month_label(self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        self.labels().months[index]
    }

    pub fn format_month_year(self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_label(month), year)
    }

    pub fn format_long_date(self, date: NaiveDate) -> String {
        match self {
            Locale::English => format!(
                "{}, {} {}, {}",
                self.weekday_label(date.weekday()),
                self.month_label(date.month()),
                date.day(),
                date.year()
            ),
            Locale::Spanish => format!(
                "{}, {} de {} de {}",
                self.weekday_label(date.weekday()),
                date.day(),
                self.month_label(date.month()),
                date.year()
            ),
        }
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "es" | "spanish" | "español" => Ok(Locale::Spanish),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_locale_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
        assert_eq!("ES".parse::<Locale>(), Ok(Locale::Spanish));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn mode_labels_are_localized() {
        assert_eq!(Locale::English.mode_label(&Mode::Insert), "Insert");
        assert_eq!(Locale::Spanish.mode_label(&Mode::Insert), "Edición");
        assert_eq!(Locale::Spanish.mode_label(&Mode::Move), "Mover");
    }

    #[test]
    fn room_labels_are_localized() {
        assert_eq!(Locale::English.room_label(RoomType::Meeting), "Meeting room");
        assert_eq!(Locale::Spanish.room_label(RoomType::Meeting), "Sala de reuniones");
    }

    #[test]
    fn all_filter_uses_all_label() {
        assert_eq!(Locale::English.filter_label(RoomFilter::All), "All");
        assert_eq!(Locale::Spanish.filter_label(RoomFilter::All), "Todas");
    }

    #[test]
    fn weekday_labels_start_on_monday() {
        assert_eq!(Locale::English.weekday_label(Weekday::Mon), "Mon");
        assert_eq!(Locale::Spanish.weekday_label(Weekday::Sun), "Dom");
    }

    #[test]
    fn long_date_format_follows_locale() {
        let d = date(2024, 3, 1);
        assert_eq!(Locale::English.format_long_date(d), "Fri, March 1, 2024");
        assert_eq!(Locale::Spanish.format_long_date(d), "Vie, 1 de marzo de 2024");
    }

    #[test]
    fn every_form_field_has_a_label() {
        for locale in [Locale::English, Locale::Spanish] {
            for field in FormField::ORDER {
                assert!(!locale.field_label(field).is_empty());
            }
        }
    }
}
