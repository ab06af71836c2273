//! Request DTOs for the proxy API
//!
//! Defines the query string accepted by `GET /api/exercises` and its mapping
//! onto upstream exercise endpoints.

/// Prefix applied to every exercise cache key
pub const EXERCISE_CACHE_PREFIX: &str = "exercise_";

/// Endpoint used when the query does not select anything more specific
pub const DEFAULT_EXERCISE_ENDPOINT: &str = "/exercises";

// == Exercise Type ==
/// The values of the `type` query parameter that select an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseType {
    BodyPart,
    Equipment,
    Target,
    Name,
    Id,
    BodyPartList,
    EquipmentList,
    TargetList,
}

impl ExerciseType {
    /// Parses the wire name. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<ExerciseType> {
        match s {
            "bodyPart" => Some(ExerciseType::BodyPart),
            "equipment" => Some(ExerciseType::Equipment),
            "target" => Some(ExerciseType::Target),
            "name" => Some(ExerciseType::Name),
            "id" => Some(ExerciseType::Id),
            "bodyPartList" => Some(ExerciseType::BodyPartList),
            "equipmentList" => Some(ExerciseType::EquipmentList),
            "targetList" => Some(ExerciseType::TargetList),
            _ => None,
        }
    }

    /// The wire name, as accepted by `parse`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::BodyPart => "bodyPart",
            ExerciseType::Equipment => "equipment",
            ExerciseType::Target => "target",
            ExerciseType::Name => "name",
            ExerciseType::Id => "id",
            ExerciseType::BodyPartList => "bodyPartList",
            ExerciseType::EquipmentList => "equipmentList",
            ExerciseType::TargetList => "targetList",
        }
    }

    /// Whether the type only resolves together with a `param`.
    pub fn takes_param(&self) -> bool {
        !matches!(
            self,
            ExerciseType::BodyPartList | ExerciseType::EquipmentList | ExerciseType::TargetList
        )
    }
}

// == Exercise Query ==
/// Query string of `GET /api/exercises`.
///
/// `type` is kept as a raw string so unknown values fall back to the default
/// endpoint instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub kind: Option<String>,
    pub param: Option<String>,
}

impl ExerciseQuery {
    pub fn new(kind: Option<&str>, param: Option<&str>) -> Self {
        Self {
            kind: kind.map(str::to_string),
            param: param.map(str::to_string),
        }
    }

    /// Parses a raw query string. Never fails: when a key repeats, the first
    /// occurrence wins and later ones are ignored.
    pub fn from_query_string(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "type" if query.kind.is_none() => query.kind = Some(value.into_owned()),
                "param" if query.param.is_none() => query.param = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    /// Resolves the upstream endpoint for this query.
    ///
    /// Param-taking types need a non-empty `param` that is not a `.` or `..`
    /// path segment; list types resolve only when `param` is absent. Every
    /// other combination yields `/exercises`.
    pub fn endpoint(&self) -> ExerciseEndpoint {
        let kind = self.kind.as_deref().filter(|k| !k.is_empty());
        let param = self.param.as_deref().filter(|p| !p.is_empty());

        match (kind.and_then(ExerciseType::parse), param) {
            (Some(kind), Some(param)) if kind.takes_param() && !is_dot_segment(param) => {
                let resource = match kind {
                    ExerciseType::Id => "exercise",
                    other => other.as_str(),
                };
                ExerciseEndpoint::new(&[resource, param])
            }
            (Some(kind), None) if !kind.takes_param() => ExerciseEndpoint::new(&[kind.as_str()]),
            _ => ExerciseEndpoint::default(),
        }
    }
}

fn is_dot_segment(param: &str) -> bool {
    matches!(param, "." | "..")
}

// == Exercise Endpoint ==
/// Resolved upstream path, e.g. `/exercises/bodyPart/back`.
///
/// The `param` is always a single segment, even if it contains `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExerciseEndpoint {
    segments: Vec<String>,
}

impl ExerciseEndpoint {
    /// Builds `/exercises/<tail...>`.
    fn new(tail: &[&str]) -> Self {
        let mut segments = vec![DEFAULT_EXERCISE_ENDPOINT.trim_start_matches('/').to_string()];
        segments.extend(tail.iter().map(|s| s.to_string()));
        Self { segments }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Cache key under which this endpoint's payload is stored.
    pub fn cache_key(&self) -> String {
        format!("{}{}", EXERCISE_CACHE_PREFIX, self.path())
    }

    /// Path segments, each to be encoded on its own.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl Default for ExerciseEndpoint {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl std::fmt::Display for ExerciseEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
