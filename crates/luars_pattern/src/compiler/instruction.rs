use crate::class::CharClass;

/// One bytecode unit. Branch operands are absolute instruction indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Match one literal character.
    Char(char),
    /// Match one character against a class (`.`, `%a`, `[set]`).
    Class(CharClass),
    /// Try the first target; on failure continue at the second.
    Split(usize, usize),
    Jump(usize),
    /// Record the current subject offset as the start of a capture slot.
    CaptureStart(usize),
    /// Record the current subject offset as the end of a capture slot.
    CaptureEnd(usize),
    Accept,
}

impl Instruction {
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Char(_) => "CHAR",
            Instruction::Class(_) => "CLASS",
            Instruction::Split(..) => "SPLIT",
            Instruction::Jump(_) => "JMP",
            Instruction::CaptureStart(_) => "CAPSTART",
            Instruction::CaptureEnd(_) => "CAPEND",
            Instruction::Accept => "ACCEPT",
        }
    }

    /// Branch targets of a control-flow instruction.
    pub fn targets(&self) -> (Option<usize>, Option<usize>) {
        match self {
            Instruction::Split(x, y) => (Some(*x), Some(*y)),
            Instruction::Jump(x) => (Some(*x), None),
            _ => (None, None),
        }
    }
}

/// Compiled pattern: immutable, shareable between match calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub(crate) code: Vec<Instruction>,
    pub(crate) captures: usize,
    pub(crate) head_anchored: bool,
    pub(crate) tail_anchored: bool,
}

impl Program {
    pub fn instructions(&self) -> &[Instruction] {
        &self.code
    }

    /// Number of capture slots.
    pub fn captures(&self) -> usize {
        self.captures
    }

    pub fn head_anchored(&self) -> bool {
        self.head_anchored
    }

    pub fn tail_anchored(&self) -> bool {
        self.tail_anchored
    }

    /// Human-readable listing, one instruction per line.
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        let mut num = itoa::Buffer::new();
        for (pc, inst) in self.code.iter().enumerate() {
            let pc = num.format(pc);
            for _ in pc.len()..4 {
                out.push(' ');
            }
            out.push_str(pc);
            out.push_str("  ");
            out.push_str(inst.name());
            match inst {
                Instruction::Char(c) => {
                    out.push_str(" '");
                    out.push(*c);
                    out.push('\'');
                }
                Instruction::Class(class) => {
                    out.push(' ');
                    out.push_str(&class.to_string());
                }
                Instruction::Split(x, y) => {
                    out.push(' ');
                    out.push_str(num.format(*x));
                    out.push(' ');
                    out.push_str(num.format(*y));
                }
                Instruction::Jump(x) | Instruction::CaptureStart(x) | Instruction::CaptureEnd(x) => {
                    out.push(' ');
                    out.push_str(num.format(*x));
                }
                Instruction::Accept => {
                    if self.tail_anchored {
                        out.push_str(" $");
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
