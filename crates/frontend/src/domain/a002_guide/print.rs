//! Printable "Guia de Remessa" document.
//!
//! `render_print_document` is pure: it takes an already validated snapshot
//! and returns a complete HTML page. User-supplied text is escaped.

use crate::domain::a001_supplier::directory::{or_not_informed, NOT_INFORMED};
use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_guide::aggregate::EquipmentLine;
use std::fmt::Write;

const BLANK_DEFECT: &str =
    "________________________________________________________________________________";

#[derive(Debug, Clone, PartialEq)]
pub struct PrintSnapshot {
    pub number: String,
    /// DD/MM/YYYY, printed as shown on the form
    pub issue_date: String,
    pub supplier: Supplier,
    pub equipment: Vec<EquipmentLine>,
    /// Encoded motive string
    pub motive: String,
    pub defect: String,
    /// DD/MM/YYYY, footer date
    pub generated_on: String,
}

fn esc(s: &str) -> String {
    ammonia::clean_text(s)
}

fn esc_or(s: &str, fallback: &str) -> String {
    if s.is_empty() {
        fallback.to_string()
    } else {
        esc(s)
    }
}

fn supplier_field(value: Option<&str>) -> String {
    let value = or_not_informed(value);
    if value == NOT_INFORMED {
        value
    } else {
        esc(&value)
    }
}

fn equipment_rows(lines: &[EquipmentLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td></td></tr>",
            line.quantity,
            esc(&line.description),
            esc_or(&line.serial_number, "-"),
            esc_or(&line.asset_tag, "-"),
            esc_or(&line.value, "-"),
        );
    }
    out
}

pub fn render_print_document(snap: &PrintSnapshot) -> String {
    let number = esc(&snap.number);
    let supplier = &snap.supplier;

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Guia de Remessa - {number}</title>
<style>{style}</style>
</head>
<body>
<div class="container-impressao">
  <div class="header-impressao">
    <h1>GUIA DE REMESSA PARA MANUTENÇÃO/CONSERTO</h1>
    <p class="empresa-info">BANCO WOORI BANK DO BRASIL S/A</p>
    <p class="empresa-cnpj">CNPJ: 15.357.060.0001-33</p>
  </div>

  <div class="section-impressao">
    <div class="section-title">DADOS DA REMESSA</div>
    <div class="dados-guia">
      <div><strong>Número da Guia:</strong> {number}</div>
      <div><strong>Data de Emissão:</strong> {issue_date}</div>
    </div>
  </div>

  <div class="section-impressao">
    <div class="section-title">INFORMAÇÕES DO FORNECEDOR/PRESTADOR DE SERVIÇOS</div>
    <div class="fornecedor-info">
      <p><strong>Razão Social:</strong> {name}</p>
      <p><strong>CNPJ:</strong> {tax_id}</p>
      <p><strong>Contato:</strong> {contact}</p>
      <p><strong>E-mail:</strong> {email}</p>
      <p><strong>Endereço:</strong> {address}</p>
      <p><strong>Responsável:</strong> {responsible}</p>
    </div>
  </div>

  <div class="section-impressao">
    <div class="section-title">ATIVOS REMETIDOS</div>
    <table class="table-impressao">
      <thead>
        <tr>
          <th width="8%">Qtd.</th>
          <th width="32%">Descrição do Equipamento/Ativo</th>
          <th width="15%">Nº de Série</th>
          <th width="15%">Patrimônio</th>
          <th width="15%">Valor Contábil</th>
          <th width="15%">Observações</th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
  </div>

  <div class="section-impressao">
    <div class="section-title">MOTIVO DA REMESSA</div>
    <div class="motivo-defeito">
      <p><strong>Motivo:</strong> {motive}</p>
      <p><strong>Defeito/Problema Relatado:</strong></p>
      <p class="caixa-defeito">{defect}</p>
    </div>
  </div>

  <div class="section-impressao">
    <div class="section-title">OBSERVAÇÕES</div>
    <div class="caixa-texto">
      <p>• Os equipamentos deverão ser devolvidos em perfeitas condições de uso</p>
      <p>• Prazo máximo para devolução: 30 dias</p>
      <p>• Em caso de avarias durante o transporte, comunicar imediatamente</p>
    </div>
  </div>

  <div class="section-impressao">
    <div class="section-title">PARECER FINAL</div>
    <div class="caixa-texto"></div>
  </div>

  <div class="assinaturas">
    <div class="assinatura">
      <p>EMITENTE</p>
      <p>(Responsável pelo envio)</p>
      <div class="assinatura-nome">___________________________________</div>
    </div>
    <div class="assinatura">
      <p>RECEBEDOR</p>
      <p>(Fornecedor/Prestador de Serviço)</p>
      <div class="assinatura-nome">___________________________________</div>
      <p>Data: ___/___/_______</p>
    </div>
    <div class="assinatura">
      <p>CONFERÊNCIA</p>
      <p>(Diretoria/Financeiro)</p>
      <div class="assinatura-nome">___________________________________</div>
    </div>
  </div>

  <div class="rodape">
    <p>Documento gerado em {generated_on} - Sistema de Gestão de Guias de Remessa</p>
    <p>Via: Fornecedor | Emitente: Arquivo | Diretoria: Controle</p>
  </div>
</div>
<script>
  window.focus();
  window.onload = function () {{ setTimeout(function () {{ window.print(); }}, 500); }};
  window.onafterprint = function () {{ setTimeout(function () {{ window.close(); }}, 1000); }};
</script>
</body>
</html>
"#,
        style = PRINT_CSS,
        number = number,
        issue_date = esc(&snap.issue_date),
        name = esc(&supplier.name),
        tax_id = esc(&supplier.tax_id),
        contact = supplier_field(supplier.contact.as_deref()),
        email = supplier_field(supplier.email.as_deref()),
        address = supplier_field(supplier.address.as_deref()),
        responsible = supplier_field(supplier.responsible.as_deref()),
        rows = equipment_rows(&snap.equipment),
        motive = esc_or(&snap.motive, NOT_INFORMED),
        defect = esc_or(&snap.defect, BLANK_DEFECT),
        generated_on = esc(&snap.generated_on),
    )
}

const PRINT_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: Arial, sans-serif; line-height: 1.4; color: #000; padding: 20px; background: white; }
.container-impressao { max-width: 210mm; margin: 0 auto; }
.header-impressao { text-align: center; margin-bottom: 20px; padding-bottom: 15px; border-bottom: 3px double #000; }
.header-impressao h1 { font-size: 18px; margin-bottom: 10px; text-transform: uppercase; }
.empresa-info { font-weight: bold; margin-bottom: 5px; }
.empresa-cnpj { font-size: 12px; }
.section-impressao { margin-bottom: 20px; page-break-inside: avoid; }
.section-title { font-weight: bold; font-size: 14px; margin-bottom: 10px; padding: 5px; background: #f0f0f0; border: 1px solid #000; }
.dados-guia { display: flex; justify-content: space-between; margin-bottom: 15px; font-size: 12px; }
.fornecedor-info { margin-bottom: 15px; font-size: 12px; }
.fornecedor-info p { margin: 2px 0; }
.table-impressao { width: 100%; border-collapse: collapse; margin-bottom: 15px; font-size: 10px; }
.table-impressao th, .table-impressao td { border: 1px solid #000; padding: 6px; text-align: left; }
.table-impressao th { background: #e0e0e0; font-weight: bold; }
.motivo-defeito { margin-bottom: 20px; font-size: 12px; }
.motivo-defeito p { margin: 5px 0; }
.caixa-defeito { margin-top: 10px; min-height: 60px; border: 1px solid #ccc; padding: 8px; white-space: pre-wrap; }
.caixa-texto { min-height: 80px; border: 1px solid #ccc; padding: 8px; margin-bottom: 20px; }
.assinaturas { display: flex; justify-content: space-between; margin-top: 40px; page-break-inside: avoid; }
.assinatura { text-align: center; width: 30%; border-top: 1px solid #000; padding-top: 60px; }
.assinatura p { margin: 5px 0; font-size: 11px; }
.assinatura-nome { font-weight: bold; margin-top: 10px; }
.rodape { text-align: center; margin-top: 30px; font-size: 10px; color: #666; border-top: 1px solid #000; padding-top: 10px; }
@media print { body { padding: 10px; } .no-print { display: none; } }
"#;
