//! Render functions for the Prisma (generated-client) backend.
//!
//! Services go through the shared `PrismaService` and the generated client's
//! per-model accessor (`this.prisma.<camel>`). Rows are soft-deleted: reads
//! filter on `deletedAt`, `remove` stamps it.

use crate::domain::ModuleNames;

pub(super) fn service(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Injectable, NotFoundException }} from '@nestjs/common';
import {{ PrismaService }} from '../prisma/prisma.service';
import {{ Prisma }} from '@prisma/client';

@Injectable()
export class {pascal}Service {{
  constructor(private prisma: PrismaService) {{}}

  async create(data: Prisma.{pascal}CreateInput) {{
    return this.prisma.{camel}.create({{ data }});
  }}

  async findAll() {{
    return this.prisma.{camel}.findMany({{ where: {{ deletedAt: null }} }});
  }}

  async findOne(id: string) {{
    const item = await this.prisma.{camel}.findUnique({{ where: {{ {camel}Id: BigInt(id) }} }});
    if (!item) throw new NotFoundException(`{pascal} ${{id}} not found`);
    return item;
  }}

  async update(id: string, data: Prisma.{pascal}UpdateInput) {{
    await this.findOne(id);
    return this.prisma.{camel}.update({{ where: {{ {camel}Id: BigInt(id) }}, data }});
  }}

  async remove(id: string) {{
    await this.findOne(id);
    return this.prisma.{camel}.update({{
      where: {{ {camel}Id: BigInt(id) }},
      data: {{ deletedAt: new Date() }},
    }});
  }}
}}
"#,
        pascal = n.pascal(),
        camel = n.camel(),
    )
}

pub(super) fn service_spec(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Test, TestingModule }} from '@nestjs/testing';
import {{ {pascal}Service }} from './{kebab}.service';
import {{ PrismaService }} from '../prisma/prisma.service';

describe('{pascal}Service', () => {{
  let service: {pascal}Service;

  beforeEach(async () => {{
    const module: TestingModule = await Test.createTestingModule({{
      providers: [{pascal}Service, {{ provide: PrismaService, useValue: {{}} }}],
    }}).compile();

    service = module.get<{pascal}Service>({pascal}Service);
  }});

  it('should be defined', () => {{
    expect(service).toBeDefined();
  }});
}});
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn controller(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Body, Controller, Delete, Get, Param, Patch, Post, UseGuards }} from '@nestjs/common';
import {{ {pascal}Service }} from './{kebab}.service';
import {{ JwtAuthGuard }} from '../auth/guards/jwt-auth.guard';

@Controller('{kebab}s')
@UseGuards(JwtAuthGuard)
export class {pascal}Controller {{
  constructor(private readonly service: {pascal}Service) {{}}

  @Post()
  create(@Body() data: any) {{
    return this.service.create(data);
  }}

  @Get()
  findAll() {{
    return this.service.findAll();
  }}

  @Get(':id')
  findOne(@Param('id') id: string) {{
    return this.service.findOne(id);
  }}

  @Patch(':id')
  update(@Param('id') id: string, @Body() data: any) {{
    return this.service.update(id, data);
  }}

  @Delete(':id')
  remove(@Param('id') id: string) {{
    return this.service.remove(id);
  }}
}}
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn controller_spec(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Test, TestingModule }} from '@nestjs/testing';
import {{ {pascal}Controller }} from './{kebab}.controller';
import {{ {pascal}Service }} from './{kebab}.service';

describe('{pascal}Controller', () => {{
  let controller: {pascal}Controller;

  beforeEach(async () => {{
    const module: TestingModule = await Test.createTestingModule({{
      controllers: [{pascal}Controller],
      providers: [{{ provide: {pascal}Service, useValue: {{}} }}],
    }}).compile();

    controller = module.get<{pascal}Controller>({pascal}Controller);
  }});

  it('should be defined', () => {{
    expect(controller).toBeDefined();
  }});
}});
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn module(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Module }} from '@nestjs/common';
import {{ {pascal}Controller }} from './{kebab}.controller';
import {{ {pascal}Service }} from './{kebab}.service';

@Module({{
  controllers: [{pascal}Controller],
  providers: [{pascal}Service],
  exports: [{pascal}Service],
}})
export class {pascal}Module {{}}
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}
