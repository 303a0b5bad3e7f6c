/// UseCase identity, used to tag log lines
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u508")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "preview_url_additions")
    fn usecase_name() -> &'static str;

    /// Full name like "u508_preview_url_additions"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
