#![no_main]

use libfuzzer_sys::fuzz_target;
use tlang::syntax::{RecoveryPolicy, TokenStream, parser, scanner};
use tlang::AnalysisConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let tokens = scanner::scan(source).tokens;
        for policy in [RecoveryPolicy::Local, RecoveryPolicy::Enclosing] {
            let mut stream = TokenStream::new(tokens.clone());
            let outcome = parser::parse(&mut stream, &AnalysisConfig::new().with_recovery(policy));
            assert!(outcome.program.is_none() || outcome.diagnostics.is_empty());
        }
    }
});
