/// Derives the Compose service name for the container at `index` in the batch.
///
/// Engines report names with a leading `/`; exactly one is stripped. When the
/// container has no usable name, `service-<index>` is synthesized. A synthesized
/// name that is already `taken` gets a numeric suffix until it is free, so it
/// never shadows a name the engine reported.
pub fn service_name(raw: &str, index: usize, taken: impl Fn(&str) -> bool) -> String {
    let stripped = raw.strip_prefix('/').unwrap_or(raw);
    if !stripped.is_empty() {
        return stripped.to_string();
    }

    let base = format!("service-{}", index);
    if !taken(base.as_str()) {
        return base;
    }

    let mut suffix = 1;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken(candidate.as_str()) {
            return candidate;
        }
        suffix += 1;
    }
}
