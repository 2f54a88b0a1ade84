//! Catalogue of supported Open Data API endpoints.
//!
//! Every operation the client exposes is described by one [`Endpoint`] row:
//! its group, its name within the group, and its path as a sequence of fixed
//! and caller-supplied segments. The service groups in [`crate::groups`] are
//! thin wrappers over these rows, so adding an upstream endpoint is one
//! const plus one [`CATALOGUE`] entry plus a one-line method.

use crate::error::ApiError;
use crate::url;

/// One path component of an endpoint: either a literal or a caller-supplied
/// parameter, named for documentation and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Fixed(&'static str),
    Param(&'static str),
}

/// Descriptor for a single upstream endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub group: &'static str,
    pub name: &'static str,
    pub segments: &'static [Segment],
}

impl Endpoint {
    /// Number of caller-supplied path parameters.
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Param(_)))
            .count()
    }

    /// Identifier used to look the endpoint up by name, e.g. `foodservices.menu`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }

    /// Display form of the path, e.g. `foodservices/{year}/{week}/menu`.
    pub fn path_template(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Fixed(text) => (*text).to_string(),
                Segment::Param(name) => format!("{{{name}}}"),
            })
            .collect();
        parts.join("/")
    }

    /// Build the request URL for this endpoint.
    ///
    /// `params` fill the `Param` segments positionally. Supplying the wrong
    /// number of parameters is an [`ApiError::SegmentCount`]; values are
    /// passed through without normalisation or encoding.
    pub fn url(&self, key: &str, params: &[&str]) -> Result<String, ApiError> {
        let expected = self.arity();
        if params.len() != expected {
            return Err(ApiError::SegmentCount {
                group: self.group,
                name: self.name,
                expected,
                supplied: params.len(),
            });
        }

        let mut resolved = Vec::with_capacity(self.segments.len());
        let mut next_param = 0;
        for segment in self.segments {
            match segment {
                Segment::Fixed(text) => resolved.push(*text),
                Segment::Param(_) => {
                    resolved.push(params[next_param]);
                    next_param += 1;
                }
            }
        }

        Ok(url::format(key, &resolved))
    }
}

use Segment::{Fixed, Param};

// Food services

pub const FOODSERVICES_MENU: Endpoint = Endpoint {
    group: "foodservices",
    name: "menu",
    segments: &[Fixed("foodservices"), Fixed("menu")],
};

pub const FOODSERVICES_NOTES: Endpoint = Endpoint {
    group: "foodservices",
    name: "notes",
    segments: &[Fixed("foodservices"), Fixed("notes")],
};

pub const FOODSERVICES_DIETS: Endpoint = Endpoint {
    group: "foodservices",
    name: "diets",
    segments: &[Fixed("foodservices"), Fixed("diets")],
};

pub const FOODSERVICES_OUTLETS: Endpoint = Endpoint {
    group: "foodservices",
    name: "outlets",
    segments: &[Fixed("foodservices"), Fixed("outlets")],
};

pub const FOODSERVICES_LOCATIONS: Endpoint = Endpoint {
    group: "foodservices",
    name: "locations",
    segments: &[Fixed("foodservices"), Fixed("locations")],
};

pub const FOODSERVICES_WATCARD: Endpoint = Endpoint {
    group: "foodservices",
    name: "watcard",
    segments: &[Fixed("foodservices"), Fixed("watcard")],
};

pub const FOODSERVICES_ANNOUNCEMENTS: Endpoint = Endpoint {
    group: "foodservices",
    name: "announcements",
    segments: &[Fixed("foodservices"), Fixed("announcements")],
};

pub const FOODSERVICES_PRODUCTS: Endpoint = Endpoint {
    group: "foodservices",
    name: "products",
    segments: &[Fixed("foodservices"), Fixed("products"), Param("product_id")],
};

pub const FOODSERVICES_MENU_DATED: Endpoint = Endpoint {
    group: "foodservices",
    name: "menu_dated",
    segments: &[Fixed("foodservices"), Param("year"), Param("week"), Fixed("menu")],
};

pub const FOODSERVICES_NOTES_DATED: Endpoint = Endpoint {
    group: "foodservices",
    name: "notes_dated",
    segments: &[Fixed("foodservices"), Param("year"), Param("week"), Fixed("notes")],
};

pub const FOODSERVICES_ANNOUNCEMENTS_DATED: Endpoint = Endpoint {
    group: "foodservices",
    name: "announcements_dated",
    segments: &[
        Fixed("foodservices"),
        Param("year"),
        Param("week"),
        Fixed("announcements"),
    ],
};

// Courses

pub const COURSES_BY_SUBJECT: Endpoint = Endpoint {
    group: "courses",
    name: "by_subject",
    segments: &[Fixed("courses"), Param("subject")],
};

pub const COURSES_INFO_BY_ID: Endpoint = Endpoint {
    group: "courses",
    name: "info_by_id",
    segments: &[Fixed("courses"), Param("course_id")],
};

pub const COURSES_SCHEDULE_BY_ID: Endpoint = Endpoint {
    group: "courses",
    name: "schedule_by_id",
    segments: &[Fixed("courses"), Param("class_number"), Fixed("schedule")],
};

pub const COURSES_INFO_BY_CATALOG_NUMBER: Endpoint = Endpoint {
    group: "courses",
    name: "info_by_catalog_number",
    segments: &[Fixed("courses"), Param("subject"), Param("catalog_number")],
};

pub const COURSES_SCHEDULE_BY_CATALOG_NUMBER: Endpoint = Endpoint {
    group: "courses",
    name: "schedule_by_catalog_number",
    segments: &[
        Fixed("courses"),
        Param("subject"),
        Param("catalog_number"),
        Fixed("schedule"),
    ],
};

pub const COURSES_PREREQUISITES_BY_CATALOG_NUMBER: Endpoint = Endpoint {
    group: "courses",
    name: "prerequisites_by_catalog_number",
    segments: &[
        Fixed("courses"),
        Param("subject"),
        Param("catalog_number"),
        Fixed("prerequisites"),
    ],
};

pub const COURSES_EXAM_SCHEDULE_BY_CATALOG_NUMBER: Endpoint = Endpoint {
    group: "courses",
    name: "exam_schedule_by_catalog_number",
    segments: &[
        Fixed("courses"),
        Param("subject"),
        Param("catalog_number"),
        Fixed("examschedule"),
    ],
};

// Events

pub const EVENTS_ALL: Endpoint = Endpoint {
    group: "events",
    name: "all",
    segments: &[Fixed("events")],
};

pub const EVENTS_BY_SITE: Endpoint = Endpoint {
    group: "events",
    name: "by_site",
    segments: &[Fixed("events"), Param("site")],
};

pub const EVENTS_BY_SITE_AND_ID: Endpoint = Endpoint {
    group: "events",
    name: "by_site_and_id",
    segments: &[Fixed("events"), Param("site"), Param("id")],
};

pub const EVENTS_HOLIDAYS: Endpoint = Endpoint {
    group: "events",
    name: "holidays",
    segments: &[Fixed("events"), Fixed("holidays")],
};

// News

pub const NEWS_ALL: Endpoint = Endpoint {
    group: "news",
    name: "all",
    segments: &[Fixed("news")],
};

pub const NEWS_BY_SITE: Endpoint = Endpoint {
    group: "news",
    name: "by_site",
    segments: &[Fixed("news"), Param("site")],
};

pub const NEWS_BY_SITE_AND_ID: Endpoint = Endpoint {
    group: "news",
    name: "by_site_and_id",
    segments: &[Fixed("news"), Param("site"), Param("id")],
};

// Services

pub const SERVICES_BY_SITE: Endpoint = Endpoint {
    group: "services",
    name: "by_site",
    segments: &[Fixed("services"), Param("site")],
};

// Weather

pub const WEATHER_CURRENT: Endpoint = Endpoint {
    group: "weather",
    name: "current",
    segments: &[Fixed("weather"), Fixed("current")],
};

// Terms

pub const TERMS_LIST: Endpoint = Endpoint {
    group: "terms",
    name: "list",
    segments: &[Fixed("terms"), Fixed("list")],
};

pub const TERMS_EXAM_SCHEDULE: Endpoint = Endpoint {
    group: "terms",
    name: "exam_schedule",
    segments: &[Fixed("terms"), Param("term"), Fixed("examschedule")],
};

pub const TERMS_SUBJECT_SCHEDULE: Endpoint = Endpoint {
    group: "terms",
    name: "subject_schedule",
    segments: &[Fixed("terms"), Param("term"), Param("subject"), Fixed("schedule")],
};

pub const TERMS_CLASS_SCHEDULE: Endpoint = Endpoint {
    group: "terms",
    name: "class_schedule",
    segments: &[
        Fixed("terms"),
        Param("term"),
        Param("subject"),
        Param("catalog_number"),
        Fixed("schedule"),
    ],
};

pub const TERMS_INFO_SESSIONS: Endpoint = Endpoint {
    group: "terms",
    name: "info_sessions",
    segments: &[Fixed("terms"), Param("term"), Fixed("infosessions")],
};

// Resources

pub const RESOURCES_TUTORS: Endpoint = Endpoint {
    group: "resources",
    name: "tutors",
    segments: &[Fixed("resources"), Fixed("tutors")],
};

pub const RESOURCES_PRINTERS: Endpoint = Endpoint {
    group: "resources",
    name: "printers",
    segments: &[Fixed("resources"), Fixed("printers")],
};

pub const RESOURCES_INFOSESSIONS: Endpoint = Endpoint {
    group: "resources",
    name: "infosessions",
    segments: &[Fixed("resources"), Fixed("infosessions")],
};

pub const RESOURCES_GOOSEWATCH: Endpoint = Endpoint {
    group: "resources",
    name: "goosewatch",
    segments: &[Fixed("resources"), Fixed("goosewatch")],
};

// Codes

pub const CODES_UNITS: Endpoint = Endpoint {
    group: "codes",
    name: "units",
    segments: &[Fixed("codes"), Fixed("units")],
};

pub const CODES_TERMS: Endpoint = Endpoint {
    group: "codes",
    name: "terms",
    segments: &[Fixed("codes"), Fixed("terms")],
};

pub const CODES_GROUPS: Endpoint = Endpoint {
    group: "codes",
    name: "groups",
    segments: &[Fixed("codes"), Fixed("groups")],
};

pub const CODES_SUBJECTS: Endpoint = Endpoint {
    group: "codes",
    name: "subjects",
    segments: &[Fixed("codes"), Fixed("subjects")],
};

pub const CODES_INSTRUCTIONS: Endpoint = Endpoint {
    group: "codes",
    name: "instructions",
    segments: &[Fixed("codes"), Fixed("instructions")],
};

// Buildings

pub const BUILDINGS_LIST: Endpoint = Endpoint {
    group: "buildings",
    name: "list",
    segments: &[Fixed("buildings"), Fixed("list")],
};

pub const BUILDINGS_DETAILS_BY_CODE: Endpoint = Endpoint {
    group: "buildings",
    name: "details_by_code",
    segments: &[Fixed("buildings"), Param("building_code")],
};

pub const BUILDINGS_COURSES_IN_ROOM: Endpoint = Endpoint {
    group: "buildings",
    name: "courses_in_room",
    segments: &[
        Fixed("buildings"),
        Param("building_code"),
        Param("room_number"),
        Fixed("courses"),
    ],
};

// API meta

pub const API_USAGE: Endpoint = Endpoint {
    group: "api",
    name: "usage",
    segments: &[Fixed("api"), Fixed("usage")],
};

pub const API_SERVICES: Endpoint = Endpoint {
    group: "api",
    name: "services",
    segments: &[Fixed("api"), Fixed("services")],
};

pub const API_METHODS: Endpoint = Endpoint {
    group: "api",
    name: "methods",
    segments: &[Fixed("api"), Fixed("methods")],
};

pub const API_VERSIONS: Endpoint = Endpoint {
    group: "api",
    name: "versions",
    segments: &[Fixed("api"), Fixed("versions")],
};

pub const API_CHANGELOG: Endpoint = Endpoint {
    group: "api",
    name: "changelog",
    segments: &[Fixed("api"), Fixed("changelog")],
};

// Server

pub const SERVER_TIME: Endpoint = Endpoint {
    group: "server",
    name: "time",
    segments: &[Fixed("server"), Fixed("time")],
};

pub const SERVER_CODES: Endpoint = Endpoint {
    group: "server",
    name: "codes",
    segments: &[Fixed("server"), Fixed("codes")],
};

/// Every supported endpoint, iterable for lookup, listing and tests.
pub const CATALOGUE: &[Endpoint] = &[
    FOODSERVICES_MENU,
    FOODSERVICES_NOTES,
    FOODSERVICES_DIETS,
    FOODSERVICES_OUTLETS,
    FOODSERVICES_LOCATIONS,
    FOODSERVICES_WATCARD,
    FOODSERVICES_ANNOUNCEMENTS,
    FOODSERVICES_PRODUCTS,
    FOODSERVICES_MENU_DATED,
    FOODSERVICES_NOTES_DATED,
    FOODSERVICES_ANNOUNCEMENTS_DATED,
    COURSES_BY_SUBJECT,
    COURSES_INFO_BY_ID,
    COURSES_SCHEDULE_BY_ID,
    COURSES_INFO_BY_CATALOG_NUMBER,
    COURSES_SCHEDULE_BY_CATALOG_NUMBER,
    COURSES_PREREQUISITES_BY_CATALOG_NUMBER,
    COURSES_EXAM_SCHEDULE_BY_CATALOG_NUMBER,
    EVENTS_ALL,
    EVENTS_BY_SITE,
    EVENTS_BY_SITE_AND_ID,
    EVENTS_HOLIDAYS,
    NEWS_ALL,
    NEWS_BY_SITE,
    NEWS_BY_SITE_AND_ID,
    SERVICES_BY_SITE,
    WEATHER_CURRENT,
    TERMS_LIST,
    TERMS_EXAM_SCHEDULE,
    TERMS_SUBJECT_SCHEDULE,
    TERMS_CLASS_SCHEDULE,
    TERMS_INFO_SESSIONS,
    RESOURCES_TUTORS,
    RESOURCES_PRINTERS,
    RESOURCES_INFOSESSIONS,
    RESOURCES_GOOSEWATCH,
    CODES_UNITS,
    CODES_TERMS,
    CODES_GROUPS,
    CODES_SUBJECTS,
    CODES_INSTRUCTIONS,
    BUILDINGS_LIST,
    BUILDINGS_DETAILS_BY_CODE,
    BUILDINGS_COURSES_IN_ROOM,
    API_USAGE,
    API_SERVICES,
    API_METHODS,
    API_VERSIONS,
    API_CHANGELOG,
    SERVER_TIME,
    SERVER_CODES,
];

/// Look an endpoint up by its qualified name, e.g. `terms.list`.
pub fn find(qualified_name: &str) -> Option<&'static Endpoint> {
    CATALOGUE
        .iter()
        .find(|endpoint| endpoint.qualified_name() == qualified_name)
}
