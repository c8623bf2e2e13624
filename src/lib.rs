/// Transforms 6502 assembly code to machine code.
///
/// The steps are:
/// 1. **Lexing** - splitting each line into label, operation and operand
/// 2. **Parsing** - classifying operands into addressing modes and directives
/// 3. **Assembling** - generating machine code in two passes
///     - Pass 1: Label indexing - recording the address of every label
///     - Pass 2: Code generation - writing machine code into the memory image
pub mod assembler;

/// Instructions, directives and source lines
pub mod ast;

/// Memory size and start address
pub mod config;

/// Hexdump utility
pub mod hexdump;

/// Logging and chrome tracing setup
pub mod instrumentation;

/// The memory image the assembler writes into
pub mod memory;

/// Memory Initialization File output
pub mod mif;
