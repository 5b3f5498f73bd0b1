//! Hash router for the three top-level pages.

/// The page currently shown below the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Students,
    Courses,
    CourseDetail(u32),
}

impl Default for Route {
    fn default() -> Self {
        Route::Courses
    }
}

impl Route {
    /// Map a `location.hash` value to a route. Anything unrecognised lands
    /// on the course list.
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (Some("students"), None, None) => Route::Students,
            (Some("courses"), None, None) => Route::Courses,
            (Some("courses"), Some(id), None) => match id.parse::<u32>() {
                Ok(id) => Route::CourseDetail(id),
                Err(_) => Route::Courses,
            },
            _ => Route::Courses,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Students => "#/students".to_string(),
            Route::Courses => "#/courses".to_string(),
            Route::CourseDetail(id) => format!("#/courses/{}", id),
        }
    }

    /// Whether `hash` is already the canonical form of its route. When it is
    /// not, the caller rewrites the hash instead of rendering.
    pub fn is_canonical(hash: &str) -> bool {
        Route::from_hash(hash).to_hash() == hash
    }

    /// Navigation bar section the route belongs to.
    pub fn section(&self) -> Section {
        match self {
            Route::Students => Section::Students,
            Route::Courses | Route::CourseDetail(_) => Section::Courses,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Courses,
    Students,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::from_hash("#/students"), Route::Students);
        assert_eq!(Route::from_hash("#/courses"), Route::Courses);
        assert_eq!(Route::from_hash("#/courses/12"), Route::CourseDetail(12));
        assert_eq!(Route::from_hash("#/courses/12/"), Route::CourseDetail(12));
    }

    #[test]
    fn unknown_routes_fall_back_to_courses() {
        assert_eq!(Route::from_hash(""), Route::Courses);
        assert_eq!(Route::from_hash("#/"), Route::Courses);
        assert_eq!(Route::from_hash("#/teachers"), Route::Courses);
        assert_eq!(Route::from_hash("#/courses/abc"), Route::Courses);
        assert_eq!(Route::from_hash("#/courses/1/edit"), Route::Courses);
    }

    #[test]
    fn canonical_hashes() {
        assert!(Route::is_canonical("#/students"));
        assert!(Route::is_canonical("#/courses/3"));
        assert!(!Route::is_canonical(""));
        assert!(!Route::is_canonical("#/"));
        assert!(!Route::is_canonical("#/courses/3/"));
    }

    #[test]
    fn detail_belongs_to_courses_section() {
        assert_eq!(Route::CourseDetail(1).section(), Section::Courses);
        assert_eq!(Route::Students.section(), Section::Students);
    }
}
