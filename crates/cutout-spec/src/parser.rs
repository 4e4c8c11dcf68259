use crate::config::DisplayConfig;
use crate::engine::{Accumulator, GeometryEngine};
use crate::error::Result;
use crate::scanner::{Scanner, Token, strip_dp};
use crate::spec::CutoutSpecification;
use crate::state::EdgeState;

/// Parses specification strings for one display.
///
/// All mutable parse state lives inside [`Parser::parse`], so a parser can be reused and shared
/// freely.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    config: DisplayConfig,
}

impl Parser {
    pub fn new(config: DisplayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn parse(&self, spec: &str) -> CutoutSpecification {
        let (spec, in_dp) = strip_dp(spec);
        let engine = GeometryEngine::new(&self.config, in_dp);

        let mut acc = Accumulator::default();
        let mut state = EdgeState::default();
        let mut fragment = String::with_capacity(spec.len());

        for token in Scanner::new(&spec) {
            match token {
                Token::Text(text) => fragment.push_str(text),
                Token::Directive(directive) => {
                    if directive.flushes() {
                        engine.place_fragment(&fragment, &state, &mut acc);
                        fragment.clear();
                    }
                    state.apply(directive);
                }
            }
        }
        engine.place_fragment(&fragment, &state, &mut acc);

        CutoutSpecification::from_accumulator(acc, self.config.pixel_ratio)
    }
}
