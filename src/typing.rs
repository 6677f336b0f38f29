/// Delay between revealed characters.
pub const TYPING_INTERVAL_MS: u64 = 100;

/// Reveals `target` one character per tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingEffect {
    target: String,
    revealed: usize,
    total: usize,
}

impl TypingEffect {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let total = target.chars().count();
        Self {
            target,
            revealed: 0,
            total,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Reveals one more character. Returns false once nothing is left.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn visible(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    /// Starts over from an empty display with a new target.
    pub fn retarget(&mut self, target: impl Into<String>) {
        *self = Self::new(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut typing = TypingEffect::new("Rust");
        assert_eq!(typing.visible(), "");
        assert!(typing.tick());
        assert_eq!(typing.visible(), "R");
        assert!(typing.tick());
        assert!(typing.tick());
        assert_eq!(typing.visible(), "Rus");
        assert!(!typing.is_complete());
        assert!(typing.tick());
        assert_eq!(typing.visible(), "Rust");
        assert!(typing.is_complete());

        // further ticks are no-ops
        assert!(!typing.tick());
        assert_eq!(typing.visible(), "Rust");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut typing = TypingEffect::new("Data & ML → ✓");
        let mut ticks = 0;
        while typing.tick() {
            ticks += 1;
            assert!(typing.target().starts_with(typing.visible()));
        }
        assert_eq!(ticks, "Data & ML → ✓".chars().count());
        assert_eq!(typing.visible(), "Data & ML → ✓");
    }

    #[test]
    fn test_empty_target_is_complete() {
        let mut typing = TypingEffect::new("");
        assert!(typing.is_complete());
        assert!(!typing.tick());
        assert_eq!(typing.visible(), "");
    }

    #[test]
    fn test_retarget_restarts() {
        let mut typing = TypingEffect::new("Engineer");
        typing.tick();
        typing.tick();
        typing.retarget("Scientist");
        assert_eq!(typing.visible(), "");
        assert_eq!(typing.target(), "Scientist");
        typing.tick();
        assert_eq!(typing.visible(), "S");
    }
}
