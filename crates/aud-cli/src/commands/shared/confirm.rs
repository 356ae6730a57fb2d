/// Refuse destructive commands that were not confirmed with `--yes`.
pub fn require_yes(yes: bool, what: &str) -> anyhow::Result<()> {
    if yes {
        Ok(())
    } else {
        anyhow::bail!("refusing to {what} without --yes")
    }
}
