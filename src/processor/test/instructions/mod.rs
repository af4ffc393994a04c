mod beq;
mod bge;
mod bne;
mod div;
mod jal;
mod jalr;
mod lw;
mod mod_;
mod mul;
mod sub;
mod sw;
