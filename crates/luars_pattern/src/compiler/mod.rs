// Pattern compiler
// Consumes the scanner's item stream and emits split/jump bytecode.
//
// Layout per repeated item (pc = code length before emission):
//   x      match
//   x?     split pc+1, pc+2 ; match
//   x*     split pc+1, pc+3 ; match ; jmp pc
//   x-     split pc+3, pc+1 ; match ; jmp pc
//   x+     match ; split pc, pc+2
// The first split target is always tried first, which is what makes `*`
// greedy and `-` lazy.

mod instruction;

pub use instruction::{Instruction, Program};

use crate::error::{CompileError, ScanError, ScanErrorKind};
use crate::scanner::{ItemKind, PatternItem, Repeat, Scanner};

struct Compiler {
    code: Vec<Instruction>,
    next_slot: usize,
    /// Slots of captures opened and not yet closed, innermost last.
    open_captures: Vec<usize>,
}

impl Compiler {
    fn new() -> Self {
        Compiler {
            code: Vec::new(),
            next_slot: 0,
            open_captures: Vec::new(),
        }
    }

    fn item(&mut self, item: PatternItem) -> Result<(), ScanError> {
        match item.kind {
            ItemKind::Literal(c) => self.single(Instruction::Char(c), item.repeat),
            ItemKind::Class(class) => self.single(Instruction::Class(class), item.repeat),
            ItemKind::CaptureOpen => {
                let slot = self.next_slot;
                self.next_slot += 1;
                self.open_captures.push(slot);
                self.code.push(Instruction::CaptureStart(slot));
            }
            ItemKind::CaptureClose => {
                let Some(slot) = self.open_captures.pop() else {
                    return Err(ScanError::new(ScanErrorKind::InvalidCapture, item.position));
                };
                self.code.push(Instruction::CaptureEnd(slot));
            }
            ItemKind::End => {}
            ItemKind::Error(e) => return Err(e),
        }
        Ok(())
    }

    fn single(&mut self, inst: Instruction, repeat: Repeat) {
        let pc = self.code.len();
        match repeat {
            Repeat::One => self.code.push(inst),
            Repeat::Optional => {
                self.code.push(Instruction::Split(pc + 1, pc + 2));
                self.code.push(inst);
            }
            Repeat::ZeroOrMore => {
                self.code.push(Instruction::Split(pc + 1, pc + 3));
                self.code.push(inst);
                self.code.push(Instruction::Jump(pc));
            }
            Repeat::Lazy => {
                self.code.push(Instruction::Split(pc + 3, pc + 1));
                self.code.push(inst);
                self.code.push(Instruction::Jump(pc));
            }
            Repeat::OneOrMore => {
                self.code.push(inst);
                self.code.push(Instruction::Split(pc, pc + 2));
            }
        }
    }
}

/// Drain a scanner into a program. The whole stream is consumed even when
/// an error item shows up, and the first error wins.
pub fn compile_scanner(mut scanner: Scanner) -> Result<Program, CompileError> {
    let mut compiler = Compiler::new();
    let mut first_error = None;

    for item in scanner.by_ref() {
        if first_error.is_some() {
            continue;
        }
        if let Err(e) = compiler.item(item) {
            first_error = Some(e);
        }
    }
    if let Some(e) = first_error {
        return Err(CompileError::Scan(e));
    }

    compiler.code.push(Instruction::Accept);
    Ok(Program {
        code: compiler.code,
        captures: scanner.total_captures(),
        head_anchored: scanner.head_anchored(),
        tail_anchored: scanner.tail_anchored(),
    })
}

pub fn compile(pattern: &str) -> Result<Program, CompileError> {
    let program = compile_scanner(Scanner::new(pattern))?;
    log::debug!(
        "compiled pattern {:?}: {} instructions, {} captures",
        pattern,
        program.code.len(),
        program.captures
    );
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{CharClass, ClassKind};

    fn code(pattern: &str) -> Vec<Instruction> {
        compile(pattern).unwrap().code
    }

    #[test]
    fn test_single() {
        assert_eq!(code("a"), vec![Instruction::Char('a'), Instruction::Accept]);
        assert_eq!(code(""), vec![Instruction::Accept]);
    }

    #[test]
    fn test_optional() {
        assert_eq!(
            code("a?"),
            vec![
                Instruction::Split(1, 2),
                Instruction::Char('a'),
                Instruction::Accept
            ]
        );
    }

    #[test]
    fn test_star_and_lazy() {
        assert_eq!(
            code("xa*"),
            vec![
                Instruction::Char('x'),
                Instruction::Split(2, 4),
                Instruction::Char('a'),
                Instruction::Jump(1),
                Instruction::Accept,
            ]
        );
        assert_eq!(
            code("xa-"),
            vec![
                Instruction::Char('x'),
                Instruction::Split(4, 2),
                Instruction::Char('a'),
                Instruction::Jump(1),
                Instruction::Accept,
            ]
        );
    }

    #[test]
    fn test_plus() {
        assert_eq!(
            code("%d+"),
            vec![
                Instruction::Class(CharClass::Named {
                    kind: ClassKind::Digit,
                    negated: false
                }),
                Instruction::Split(0, 2),
                Instruction::Accept,
            ]
        );
    }

    #[test]
    fn test_nested_captures_close_innermost() {
        assert_eq!(
            code("((a)b)(c)"),
            vec![
                Instruction::CaptureStart(0),
                Instruction::CaptureStart(1),
                Instruction::Char('a'),
                Instruction::CaptureEnd(1),
                Instruction::Char('b'),
                Instruction::CaptureEnd(0),
                Instruction::CaptureStart(2),
                Instruction::Char('c'),
                Instruction::CaptureEnd(2),
                Instruction::Accept,
            ]
        );
    }

    #[test]
    fn test_anchors_and_captures() {
        let program = compile("^(a)$").unwrap();
        assert!(program.head_anchored());
        assert!(program.tail_anchored());
        assert_eq!(program.captures(), 1);

        let program = compile("a").unwrap();
        assert!(!program.head_anchored());
        assert!(!program.tail_anchored());
    }

    #[test]
    fn test_branch_targets_in_range() {
        for pattern in ["a*b-c?d+", "(%a+)%s*=%s*(%w-)$", "[a-z]*.-x"] {
            let program = compile(pattern).unwrap();
            let len = program.instructions().len();
            for inst in program.instructions() {
                let (x, y) = inst.targets();
                assert!(x.is_none_or(|x| x < len), "{pattern}: {inst:?}");
                assert!(y.is_none_or(|y| y < len), "{pattern}: {inst:?}");
            }
            let accepts = program
                .instructions()
                .iter()
                .filter(|inst| **inst == Instruction::Accept)
                .count();
            assert_eq!(accepts, 1);
            assert_eq!(program.instructions().last(), Some(&Instruction::Accept));
        }
    }

    #[test]
    fn test_compile_error() {
        let err = compile("(%a+").unwrap_err();
        assert_eq!(err.scan_error().kind, ScanErrorKind::UnfinishedCapture);
        assert_eq!(
            err.to_string(),
            "invalid pattern: unfinished capture at position 4"
        );
        let err = compile("%f[%a]").unwrap_err();
        assert_eq!(err.scan_error().kind, ScanErrorKind::Unsupported('f'));
    }

    #[test]
    fn test_disassemble() {
        let listing = compile("(a*)%d$").unwrap().disassemble();
        let expected = "   0  CAPSTART 0\n   1  SPLIT 2 4\n   2  CHAR 'a'\n   3  JMP 1\n   4  CAPEND 0\n   5  CLASS %d\n   6  ACCEPT $\n";
        assert_eq!(listing, expected);
    }
}
